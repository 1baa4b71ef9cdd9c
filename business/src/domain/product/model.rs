use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Availability, Category, Retailer};

/// Substituted whenever a retailer item carries no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/images/outfit-placeholder.svg";

/// Normalized representation of a third-party retail item.
///
/// Records are built fresh on every search or lookup call and owned
/// exclusively by the caller that receives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Retailer-scoped identifier, `<retailer>-<source_id>`.
    pub product_id: String,
    /// Identifier in the retailer's own catalog (ASIN, eBay item id).
    pub source_id: String,
    pub retailer: Retailer,
    pub title: String,
    pub description: Option<String>,
    /// Ordered; never empty after normalization.
    pub images: Vec<String>,
    pub brand: Option<String>,
    /// Decimal currency units, always >= 0.
    pub price: f64,
    /// ISO currency code.
    pub currency: String,
    pub availability: Availability,
    pub product_url: String,
    /// Present only when an associate/partner tag is configured.
    pub affiliate_url: Option<String>,
    pub category: Category,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub event_types: Option<Vec<String>>,
    pub imported_at: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

pub struct NewProductProps {
    pub source_id: String,
    pub retailer: Retailer,
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub brand: Option<String>,
    pub price: f64,
    pub currency: String,
    pub availability: Availability,
    pub product_url: String,
    pub affiliate_url: Option<String>,
    pub category: Category,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub event_types: Option<Vec<String>>,
}

impl Product {
    /// Normalizing constructor. Source data never rejects a record here:
    /// an empty image list gets the placeholder and a negative or
    /// non-finite price collapses to 0.
    pub fn new(props: NewProductProps) -> Self {
        let images = if props.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            props.images
        };
        let price = if props.price.is_finite() && props.price > 0.0 {
            props.price
        } else {
            0.0
        };

        Self {
            product_id: format!("{}-{}", props.retailer, props.source_id),
            source_id: props.source_id,
            retailer: props.retailer,
            title: props.title,
            description: props.description,
            images,
            brand: props.brand,
            price,
            currency: props.currency,
            availability: props.availability,
            product_url: props.product_url,
            affiliate_url: props.affiliate_url,
            category: props.category,
            sizes: props.sizes,
            colors: props.colors,
            tags: props.tags,
            event_types: props.event_types,
            imported_at: Utc::now(),
            last_updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_props() -> NewProductProps {
        NewProductProps {
            source_id: "B0TESTASIN".to_string(),
            retailer: Retailer::Amazon,
            title: "Satin Slip Dress".to_string(),
            description: None,
            images: vec!["https://img.example.com/dress.jpg".to_string()],
            brand: Some("Aritzia".to_string()),
            price: 79.99,
            currency: "USD".to_string(),
            availability: Availability::InStock,
            product_url: "https://www.amazon.com/dp/B0TESTASIN".to_string(),
            affiliate_url: None,
            category: Category::Dress,
            sizes: None,
            colors: None,
            tags: None,
            event_types: None,
        }
    }

    #[test]
    fn should_scope_product_id_to_retailer() {
        let product = Product::new(base_props());
        assert_eq!(product.product_id, "amazon-B0TESTASIN");
        assert_eq!(product.source_id, "B0TESTASIN");
    }

    #[test]
    fn should_substitute_placeholder_when_images_empty() {
        let mut props = base_props();
        props.images = vec![];
        let product = Product::new(props);
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn should_keep_source_images_when_present() {
        let product = Product::new(base_props());
        assert_eq!(product.images.len(), 1);
        assert!(product.images[0].starts_with("https://"));
    }

    #[test]
    fn should_clamp_negative_price_to_zero() {
        let mut props = base_props();
        props.price = -5.0;
        assert_eq!(Product::new(props).price, 0.0);
    }

    #[test]
    fn should_clamp_non_finite_price_to_zero() {
        let mut props = base_props();
        props.price = f64::NAN;
        assert_eq!(Product::new(props).price, 0.0);
    }
}
