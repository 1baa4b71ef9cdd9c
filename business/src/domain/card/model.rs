use serde::{Deserialize, Serialize};

use crate::domain::product::filters::{DEFAULT_SEARCH_LIMIT, ProductSearchFilters};
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Retailer;

/// Source marker carried by every aggregated card so the UI can tell
/// them apart from member-owned rental listings.
pub const CARD_SOURCE: &str = "product-aggregation";

/// Where a card's synthetic owner avatar is served from.
fn retailer_avatar(retailer: Retailer) -> String {
    format!("/images/retailers/{}.svg", retailer)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLink {
    pub url: String,
    pub retailer: Retailer,
    pub price: f64,
    pub affiliate_url: Option<String>,
}

/// Synthetic owner shown on aggregated cards: the retailer stands in for
/// a platform member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardOwner {
    pub display_name: String,
    pub avatar_url: String,
}

/// Display-ready record the UI renders in its card grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitCard {
    pub id: String,
    pub images: Vec<String>,
    pub title: String,
    pub price: f64,
    pub brand: Option<String>,
    /// Aggregated retail items are never rentable.
    pub is_rentable: bool,
    pub product_links: Vec<ProductLink>,
    pub source: String,
    pub owner: CardOwner,
}

impl OutfitCard {
    pub fn from_product(product: Product) -> Self {
        let link = ProductLink {
            url: product.product_url.clone(),
            retailer: product.retailer,
            price: product.price,
            affiliate_url: product.affiliate_url.clone(),
        };
        let owner = CardOwner {
            display_name: product.retailer.to_string(),
            avatar_url: retailer_avatar(product.retailer),
        };

        Self {
            id: product.product_id,
            images: product.images,
            title: product.title,
            price: product.price,
            brand: product.brand,
            is_rentable: false,
            product_links: vec![link],
            source: CARD_SOURCE.to_string(),
            owner,
        }
    }
}

/// Loosely-typed filter shape as the UI sends it: enum values arrive as
/// plain strings and unparseable ones are dropped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardSearchQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub event_type: Option<String>,
    pub size: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub retailers: Option<Vec<String>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl CardSearchQuery {
    pub fn into_filters(self) -> ProductSearchFilters {
        let retailers = self.retailers.map(|names| {
            names
                .iter()
                .filter_map(|name| name.parse::<Retailer>().ok())
                .collect::<Vec<_>>()
        });

        ProductSearchFilters {
            category: self.category.and_then(|value| value.parse().ok()),
            event_type: self.event_type,
            size: self.size,
            price_min: self.price_min,
            price_max: self.price_max,
            brand: self.brand,
            color: self.color,
            keywords: self.query,
            retailers,
            limit: Some(self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)),
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::value_objects::{Availability, Category};

    fn sample_product() -> Product {
        Product::new(NewProductProps {
            source_id: "v1|12345|0".to_string(),
            retailer: Retailer::Ebay,
            title: "Vintage Team Jersey".to_string(),
            description: None,
            images: vec!["https://i.ebayimg.com/jersey.jpg".to_string()],
            brand: Some("Nike".to_string()),
            price: 42.5,
            currency: "USD".to_string(),
            availability: Availability::InStock,
            product_url: "https://www.ebay.com/itm/12345".to_string(),
            affiliate_url: Some("https://www.ebay.com/itm/12345?campid=555".to_string()),
            category: Category::Top,
            sizes: None,
            colors: None,
            tags: None,
            event_types: None,
        })
    }

    #[test]
    fn should_mark_aggregated_cards_as_not_rentable() {
        let card = OutfitCard::from_product(sample_product());
        assert!(!card.is_rentable);
        assert_eq!(card.source, CARD_SOURCE);
    }

    #[test]
    fn should_carry_one_product_link_with_affiliate_url() {
        let card = OutfitCard::from_product(sample_product());
        assert_eq!(card.product_links.len(), 1);
        let link = &card.product_links[0];
        assert_eq!(link.retailer, Retailer::Ebay);
        assert_eq!(link.price, 42.5);
        assert!(link.affiliate_url.as_deref().unwrap().contains("campid"));
    }

    #[test]
    fn should_synthesize_owner_from_retailer() {
        let card = OutfitCard::from_product(sample_product());
        assert_eq!(card.owner.display_name, "ebay");
        assert_eq!(card.owner.avatar_url, "/images/retailers/ebay.svg");
    }

    #[test]
    fn should_apply_default_limit_when_translating_query() {
        let filters = CardSearchQuery::default().into_filters();
        assert_eq!(filters.limit, Some(DEFAULT_SEARCH_LIMIT));
    }

    #[test]
    fn should_parse_category_and_retailer_strings() {
        let query = CardSearchQuery {
            category: Some("dress".to_string()),
            retailers: Some(vec!["amazon".to_string(), "walmart".to_string()]),
            ..Default::default()
        };
        let filters = query.into_filters();
        assert_eq!(filters.category, Some(Category::Dress));
        assert_eq!(filters.retailers, Some(vec![Retailer::Amazon]));
    }

    #[test]
    fn should_keep_empty_restriction_when_nothing_parses() {
        // An explicit restriction that names no supported retailer must
        // not silently widen the fan-out to every registered one.
        let query = CardSearchQuery {
            retailers: Some(vec!["walmart".to_string()]),
            ..Default::default()
        };
        assert_eq!(query.into_filters().retailers, Some(vec![]));
    }
}
