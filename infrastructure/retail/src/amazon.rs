use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::AggregatorError;
use business::domain::logger::Logger;
use business::domain::product::aggregator::ProductAggregator;
use business::domain::product::filters::{ProductSearchFilters, ProductSearchResult};
use business::domain::product::keywords::build_search_keywords;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{Availability, Category, Retailer};

use crate::client::{append_query_param, build_http_client};
use crate::rate_limit::RateLimiter;

/// Queried when the caller's filters produce no keyword material at all.
const DEFAULT_KEYWORDS: &str = "clothing";
/// The Product Advertising API caps one result page at ten items.
const MAX_ITEMS_PER_PAGE: usize = 10;

pub struct AmazonConfig {
    pub enabled: bool,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Associates tag; when absent no affiliate URLs are produced.
    pub partner_tag: Option<String>,
    pub endpoint: String,
    pub marketplace: String,
    pub requests_per_second: u32,
}

impl Default for AmazonConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            access_key: None,
            secret_key: None,
            partner_tag: None,
            endpoint: "https://webservices.amazon.com/paapi5".to_string(),
            marketplace: "www.amazon.com".to_string(),
            requests_per_second: 1,
        }
    }
}

// Partial view of the PA-API response shapes. Every field is optional so
// a sparse or truncated payload degrades at the mapping fallbacks
// instead of failing the whole page.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItemsEnvelope {
    search_result: Option<AmazonSearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonSearchResult {
    items: Option<Vec<AmazonItem>>,
    total_result_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetItemsEnvelope {
    items_result: Option<AmazonItemsResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonItemsResult {
    items: Option<Vec<AmazonItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonItem {
    #[serde(rename = "ASIN")]
    asin: Option<String>,
    #[serde(rename = "DetailPageURL")]
    detail_page_url: Option<String>,
    item_info: Option<AmazonItemInfo>,
    images: Option<AmazonImages>,
    offers: Option<AmazonOffers>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonItemInfo {
    title: Option<AmazonDisplayValue>,
    by_line_info: Option<AmazonByLineInfo>,
    features: Option<AmazonDisplayValues>,
    classifications: Option<AmazonClassifications>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonDisplayValue {
    display_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonDisplayValues {
    display_values: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonByLineInfo {
    brand: Option<AmazonDisplayValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonClassifications {
    binding: Option<AmazonDisplayValue>,
    product_group: Option<AmazonDisplayValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonImages {
    primary: Option<AmazonImageSet>,
    variants: Option<Vec<AmazonImageSet>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonImageSet {
    large: Option<AmazonImage>,
    medium: Option<AmazonImage>,
}

#[derive(Debug, Deserialize)]
struct AmazonImage {
    #[serde(rename = "URL")]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonOffers {
    listings: Option<Vec<AmazonListing>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonListing {
    price: Option<AmazonPrice>,
    availability: Option<AmazonAvailability>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonPrice {
    amount: Option<f64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AmazonAvailability {
    message: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
}

/// Adapter over the Amazon Product Advertising API.
pub struct AmazonAggregator {
    config: AmazonConfig,
    client: reqwest::Client,
    limiter: RateLimiter,
    logger: Arc<dyn Logger>,
}

impl AmazonAggregator {
    pub fn new(config: AmazonConfig, logger: Arc<dyn Logger>) -> Self {
        let limiter = RateLimiter::per_second(config.requests_per_second);
        Self {
            config,
            client: build_http_client(),
            limiter,
            logger,
        }
    }

    fn affiliate_url(&self, product_url: &str) -> Option<String> {
        self.config
            .partner_tag
            .as_deref()
            .map(|tag| append_query_param(product_url, "tag", tag))
    }

    fn collect_images(images: Option<AmazonImages>) -> Vec<String> {
        let Some(images) = images else {
            return Vec::new();
        };
        let mut urls = Vec::new();
        if let Some(primary) = images.primary {
            if let Some(url) = image_url(primary) {
                urls.push(url);
            }
        }
        for variant in images.variants.unwrap_or_default() {
            if let Some(url) = image_url(variant) {
                urls.push(url);
            }
        }
        urls
    }

    /// Items without an ASIN or a title carry nothing renderable and are
    /// skipped; everything else degrades field by field.
    fn map_item(&self, item: AmazonItem) -> Option<Product> {
        let asin = item.asin?;
        let info = item.item_info;

        let title = info
            .as_ref()
            .and_then(|i| i.title.as_ref())
            .and_then(|t| t.display_value.clone())?;

        let brand = info
            .as_ref()
            .and_then(|i| i.by_line_info.as_ref())
            .and_then(|b| b.brand.as_ref())
            .and_then(|b| b.display_value.clone());

        let description = info
            .as_ref()
            .and_then(|i| i.features.as_ref())
            .and_then(|f| f.display_values.as_ref())
            .filter(|values| !values.is_empty())
            .map(|values| values.join("; "));

        // Binding first, product group second; the first label that
        // classifies wins.
        let classifications = info.as_ref().and_then(|i| i.classifications.as_ref());
        let binding = classifications
            .and_then(|c| c.binding.as_ref())
            .and_then(|b| b.display_value.as_deref());
        let product_group = classifications
            .and_then(|c| c.product_group.as_ref())
            .and_then(|g| g.display_value.as_deref());
        let category = [binding, product_group]
            .into_iter()
            .flatten()
            .map(Category::from_source_label)
            .find(|category| *category != Category::Other)
            .unwrap_or(Category::Other);

        let listing = item
            .offers
            .and_then(|o| o.listings)
            .and_then(|l| l.into_iter().next());
        let (price, currency, availability) = match listing {
            Some(listing) => {
                let (price, currency) = match listing.price {
                    Some(price) => (
                        price.amount.unwrap_or(0.0),
                        price.currency.unwrap_or_else(|| "USD".to_string()),
                    ),
                    None => (0.0, "USD".to_string()),
                };
                let availability = listing
                    .availability
                    .and_then(|a| a.message.or(a.kind))
                    .map(|label| Availability::from_source_label(&label))
                    .unwrap_or(Availability::Unknown);
                (price, currency, availability)
            }
            None => (0.0, "USD".to_string(), Availability::Unknown),
        };

        let product_url = item
            .detail_page_url
            .unwrap_or_else(|| format!("https://{}/dp/{}", self.config.marketplace, asin));

        Some(Product::new(NewProductProps {
            source_id: asin,
            retailer: Retailer::Amazon,
            title,
            description,
            images: Self::collect_images(item.images),
            brand,
            price,
            currency,
            availability,
            affiliate_url: self.affiliate_url(&product_url),
            product_url,
            category,
            sizes: None,
            colors: None,
            tags: None,
            event_types: None,
        }))
    }

    fn search_payload(&self, filters: &ProductSearchFilters) -> serde_json::Value {
        let mut keywords = build_search_keywords(filters);
        if keywords.is_empty() {
            keywords = DEFAULT_KEYWORDS.to_string();
        }

        let limit = filters.limit().max(1);
        let mut payload = json!({
            "Keywords": keywords,
            "SearchIndex": "Fashion",
            "ItemCount": limit.min(MAX_ITEMS_PER_PAGE),
            "ItemPage": filters.offset() / limit + 1,
            "PartnerTag": self.config.partner_tag,
            "PartnerType": "Associates",
            "Marketplace": self.config.marketplace,
            "Resources": [
                "ItemInfo.Title",
                "ItemInfo.ByLineInfo",
                "ItemInfo.Features",
                "ItemInfo.Classifications",
                "Images.Primary.Large",
                "Images.Variants.Large",
                "Offers.Listings.Price",
                "Offers.Listings.Availability.Message",
            ],
        });
        // PA-API expresses price bounds in the lowest currency unit.
        if let Some(min) = filters.price_min {
            payload["MinPrice"] = json!((min * 100.0).round() as i64);
        }
        if let Some(max) = filters.price_max {
            payload["MaxPrice"] = json!((max * 100.0).round() as i64);
        }
        payload
    }
}

fn image_url(set: AmazonImageSet) -> Option<String> {
    set.large
        .and_then(|image| image.url)
        .or_else(|| set.medium.and_then(|image| image.url))
}

#[async_trait]
impl ProductAggregator for AmazonAggregator {
    fn retailer(&self) -> Retailer {
        Retailer::Amazon
    }

    fn is_available(&self) -> bool {
        self.config.enabled && self.config.access_key.is_some() && self.config.secret_key.is_some()
    }

    async fn search(
        &self,
        filters: &ProductSearchFilters,
    ) -> Result<ProductSearchResult, AggregatorError> {
        if !self.is_available() {
            return Err(AggregatorError::Unavailable);
        }
        self.limiter.acquire().await;

        let response = self
            .client
            .post(format!("{}/searchitems", self.config.endpoint))
            .header("Content-Type", "application/json")
            .header(
                "X-Amz-Target",
                "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems",
            )
            .header(
                "Authorization",
                self.config.access_key.as_deref().unwrap_or_default(),
            )
            .json(&self.search_payload(filters))
            .send()
            .await;

        let envelope = match response {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<SearchItemsEnvelope>().await {
                    Ok(data) => data,
                    Err(err) => {
                        self.logger
                            .error(&format!("Amazon search response did not parse: {}", err));
                        return Ok(ProductSearchResult::empty());
                    }
                }
            }
            Ok(resp) => {
                self.logger
                    .error(&format!("Amazon search returned status {}", resp.status()));
                return Ok(ProductSearchResult::empty());
            }
            Err(err) => {
                self.logger
                    .error(&format!("Amazon search request failed: {}", err));
                return Ok(ProductSearchResult::empty());
            }
        };

        let (items, total) = match envelope.search_result {
            Some(result) => {
                let items = result.items.unwrap_or_default();
                let total = result.total_result_count.unwrap_or(items.len());
                (items, total)
            }
            None => (Vec::new(), 0),
        };

        let products: Vec<Product> = items
            .into_iter()
            .filter_map(|item| self.map_item(item))
            .collect();
        let has_more = filters.offset() + products.len() < total;

        Ok(ProductSearchResult {
            products,
            total,
            has_more,
        })
    }

    async fn get_product(&self, product_id: &str) -> Result<Option<Product>, AggregatorError> {
        if !self.is_available() {
            return Err(AggregatorError::Unavailable);
        }
        self.limiter.acquire().await;

        let asin = product_id.strip_prefix("amazon-").unwrap_or(product_id);
        let payload = json!({
            "ItemIds": [asin],
            "PartnerTag": self.config.partner_tag,
            "PartnerType": "Associates",
            "Marketplace": self.config.marketplace,
            "Resources": [
                "ItemInfo.Title",
                "ItemInfo.ByLineInfo",
                "ItemInfo.Features",
                "ItemInfo.Classifications",
                "Images.Primary.Large",
                "Images.Variants.Large",
                "Offers.Listings.Price",
                "Offers.Listings.Availability.Message",
            ],
        });

        let response = self
            .client
            .post(format!("{}/getitems", self.config.endpoint))
            .header("Content-Type", "application/json")
            .header(
                "X-Amz-Target",
                "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems",
            )
            .header(
                "Authorization",
                self.config.access_key.as_deref().unwrap_or_default(),
            )
            .json(&payload)
            .send()
            .await;

        let envelope = match response {
            Ok(resp) if resp.status().is_success() => match resp.json::<GetItemsEnvelope>().await {
                Ok(data) => data,
                Err(err) => {
                    self.logger
                        .error(&format!("Amazon item response did not parse: {}", err));
                    return Ok(None);
                }
            },
            Ok(resp) => {
                self.logger
                    .error(&format!("Amazon item lookup returned status {}", resp.status()));
                return Ok(None);
            }
            Err(err) => {
                self.logger
                    .error(&format!("Amazon item lookup failed: {}", err));
                return Ok(None);
            }
        };

        let product = envelope
            .items_result
            .and_then(|result| result.items)
            .and_then(|items| items.into_iter().next())
            .and_then(|item| self.map_item(item));

        Ok(product)
    }
}
