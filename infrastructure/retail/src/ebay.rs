use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::AggregatorError;
use business::domain::logger::Logger;
use business::domain::product::aggregator::ProductAggregator;
use business::domain::product::filters::{ProductSearchFilters, ProductSearchResult};
use business::domain::product::keywords::build_search_keywords;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{Availability, Category, Retailer};

use crate::client::{append_query_param, build_http_client};
use crate::rate_limit::RateLimiter;

const DEFAULT_KEYWORDS: &str = "clothing";
/// Fashion category subtree the Browse API queries are pinned to.
const FASHION_CATEGORY_ID: &str = "11450";

pub struct EbayConfig {
    pub enabled: bool,
    pub oauth_token: Option<String>,
    /// Partner Network campaign; when absent no affiliate URLs are produced.
    pub campaign_id: Option<String>,
    pub endpoint: String,
    pub requests_per_second: u32,
}

impl Default for EbayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            oauth_token: None,
            campaign_id: None,
            endpoint: "https://api.ebay.com".to_string(),
            requests_per_second: 2,
        }
    }
}

// Partial view of the Browse API shapes; the same item structure comes
// back from item_summary/search and from the single-item endpoint.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbaySearchEnvelope {
    item_summaries: Option<Vec<EbayItem>>,
    total: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbayItem {
    item_id: Option<String>,
    title: Option<String>,
    short_description: Option<String>,
    price: Option<EbayPrice>,
    image: Option<EbayImage>,
    additional_images: Option<Vec<EbayImage>>,
    item_web_url: Option<String>,
    item_affiliate_web_url: Option<String>,
    brand: Option<String>,
    categories: Option<Vec<EbayCategory>>,
    estimated_availabilities: Option<Vec<EbayAvailabilityInfo>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbayPrice {
    /// Decimal amount as a string, e.g. "25.99".
    value: Option<String>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbayImage {
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbayCategory {
    category_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EbayAvailabilityInfo {
    estimated_availability_status: Option<String>,
}

/// Adapter over the eBay Browse API.
pub struct EbayAggregator {
    config: EbayConfig,
    client: reqwest::Client,
    limiter: RateLimiter,
    logger: Arc<dyn Logger>,
}

impl EbayAggregator {
    pub fn new(config: EbayConfig, logger: Arc<dyn Logger>) -> Self {
        let limiter = RateLimiter::per_second(config.requests_per_second);
        Self {
            config,
            client: build_http_client(),
            limiter,
            logger,
        }
    }

    /// Browse filter expression for the price bounds, e.g.
    /// `price:[25..99.50],priceCurrency:USD`.
    fn price_filter(filters: &ProductSearchFilters) -> Option<String> {
        if filters.price_min.is_none() && filters.price_max.is_none() {
            return None;
        }
        let lower = filters
            .price_min
            .map(|value| format!("{:.2}", value))
            .unwrap_or_default();
        let upper = filters
            .price_max
            .map(|value| format!("{:.2}", value))
            .unwrap_or_default();
        Some(format!("price:[{}..{}],priceCurrency:USD", lower, upper))
    }

    fn affiliate_url(&self, item: &EbayItem, product_url: &str) -> Option<String> {
        if let Some(url) = &item.item_affiliate_web_url {
            return Some(url.clone());
        }
        self.config
            .campaign_id
            .as_deref()
            .map(|campaign| append_query_param(product_url, "campid", campaign))
    }

    /// Items without an id or title are skipped; everything else degrades
    /// field by field.
    fn map_item(&self, item: EbayItem) -> Option<Product> {
        let item_id = item.item_id.clone()?;
        let title = item.title.clone()?;

        let (price, currency) = match &item.price {
            Some(price) => (
                price
                    .value
                    .as_deref()
                    .and_then(|value| value.parse::<f64>().ok())
                    .unwrap_or(0.0),
                price.currency.clone().unwrap_or_else(|| "USD".to_string()),
            ),
            None => (0.0, "USD".to_string()),
        };

        let availability = item
            .estimated_availabilities
            .as_ref()
            .and_then(|infos| infos.first())
            .and_then(|info| info.estimated_availability_status.as_deref())
            .map(Availability::from_source_label)
            .unwrap_or(Availability::Unknown);

        let mut images: Vec<String> = Vec::new();
        if let Some(image) = &item.image {
            if let Some(url) = &image.image_url {
                images.push(url.clone());
            }
        }
        for additional in item.additional_images.iter().flatten() {
            if let Some(url) = &additional.image_url {
                images.push(url.clone());
            }
        }

        let category = item
            .categories
            .as_ref()
            .into_iter()
            .flat_map(|categories| categories.iter())
            .filter_map(|category| category.category_name.as_deref())
            .map(Category::from_source_label)
            .find(|category| *category != Category::Other)
            .unwrap_or(Category::Other);

        let product_url = item
            .item_web_url
            .clone()
            .unwrap_or_else(|| format!("https://www.ebay.com/itm/{}", item_id));
        let affiliate_url = self.affiliate_url(&item, &product_url);

        Some(Product::new(NewProductProps {
            source_id: item_id,
            retailer: Retailer::Ebay,
            title,
            description: item.short_description,
            images,
            brand: item.brand,
            price,
            currency,
            availability,
            product_url,
            affiliate_url,
            category,
            sizes: None,
            colors: None,
            tags: None,
            event_types: None,
        }))
    }

    fn bearer_token(&self) -> String {
        format!(
            "Bearer {}",
            self.config.oauth_token.as_deref().unwrap_or_default()
        )
    }
}

#[async_trait]
impl ProductAggregator for EbayAggregator {
    fn retailer(&self) -> Retailer {
        Retailer::Ebay
    }

    fn is_available(&self) -> bool {
        self.config.enabled && self.config.oauth_token.is_some()
    }

    async fn search(
        &self,
        filters: &ProductSearchFilters,
    ) -> Result<ProductSearchResult, AggregatorError> {
        if !self.is_available() {
            return Err(AggregatorError::Unavailable);
        }
        self.limiter.acquire().await;

        let mut keywords = build_search_keywords(filters);
        if keywords.is_empty() {
            keywords = DEFAULT_KEYWORDS.to_string();
        }

        let mut query: Vec<(&str, String)> = vec![
            ("q", keywords),
            ("category_ids", FASHION_CATEGORY_ID.to_string()),
            ("limit", filters.limit().to_string()),
            ("offset", filters.offset().to_string()),
        ];
        if let Some(filter) = Self::price_filter(filters) {
            query.push(("filter", filter));
        }

        let mut request = self
            .client
            .get(format!(
                "{}/buy/browse/v1/item_summary/search",
                self.config.endpoint
            ))
            .header("Authorization", self.bearer_token())
            .query(&query);
        if let Some(campaign) = &self.config.campaign_id {
            request = request.header(
                "X-EBAY-C-ENDUSERCTX",
                format!("affiliateCampaignId={}", campaign),
            );
        }

        let envelope = match request.send().await {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<EbaySearchEnvelope>().await {
                    Ok(data) => data,
                    Err(err) => {
                        self.logger
                            .error(&format!("eBay search response did not parse: {}", err));
                        return Ok(ProductSearchResult::empty());
                    }
                }
            }
            Ok(resp) => {
                self.logger
                    .error(&format!("eBay search returned status {}", resp.status()));
                return Ok(ProductSearchResult::empty());
            }
            Err(err) => {
                self.logger
                    .error(&format!("eBay search request failed: {}", err));
                return Ok(ProductSearchResult::empty());
            }
        };

        let items = envelope.item_summaries.unwrap_or_default();
        let total = envelope.total.unwrap_or(items.len());
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

        let item_id = product_id.strip_prefix("ebay-").unwrap_or(product_id);
        let response = self
            .client
            .get(format!(
                "{}/buy/browse/v1/item/{}",
                self.config.endpoint, item_id
            ))
            .header("Authorization", self.bearer_token())
            .send()
            .await;

        let item = match response {
            Ok(resp) if resp.status().is_success() => match resp.json::<EbayItem>().await {
                Ok(item) => item,
                Err(err) => {
                    self.logger
                        .error(&format!("eBay item response did not parse: {}", err));
                    return Ok(None);
                }
            },
            Ok(resp) if resp.status() == reqwest::StatusCode::NOT_FOUND => {
                return Ok(None);
            }
            Ok(resp) => {
                self.logger
                    .error(&format!("eBay item lookup returned status {}", resp.status()));
                return Ok(None);
            }
            Err(err) => {
                self.logger
                    .error(&format!("eBay item lookup failed: {}", err));
                return Ok(None);
            }
        };

        Ok(self.map_item(item))
    }
}
