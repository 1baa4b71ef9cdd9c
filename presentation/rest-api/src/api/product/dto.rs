use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::filters::{ProductSearchFilters, ProductSearchResult};
use business::domain::product::model::Product;
use business::domain::product::value_objects::{Availability, Category, Retailer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum RetailerDto {
    #[oai(rename = "amazon")]
    Amazon,
    #[oai(rename = "ebay")]
    Ebay,
}

impl From<Retailer> for RetailerDto {
    fn from(retailer: Retailer) -> Self {
        match retailer {
            Retailer::Amazon => RetailerDto::Amazon,
            Retailer::Ebay => RetailerDto::Ebay,
        }
    }
}

impl From<RetailerDto> for Retailer {
    fn from(dto: RetailerDto) -> Self {
        match dto {
            RetailerDto::Amazon => Retailer::Amazon,
            RetailerDto::Ebay => Retailer::Ebay,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CategoryDto {
    #[oai(rename = "dress")]
    Dress,
    #[oai(rename = "top")]
    Top,
    #[oai(rename = "bottom")]
    Bottom,
    #[oai(rename = "accessory")]
    Accessory,
    #[oai(rename = "shoes")]
    Shoes,
    #[oai(rename = "other")]
    Other,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Dress => CategoryDto::Dress,
            Category::Top => CategoryDto::Top,
            Category::Bottom => CategoryDto::Bottom,
            Category::Accessory => CategoryDto::Accessory,
            Category::Shoes => CategoryDto::Shoes,
            Category::Other => CategoryDto::Other,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Dress => Category::Dress,
            CategoryDto::Top => Category::Top,
            CategoryDto::Bottom => Category::Bottom,
            CategoryDto::Accessory => Category::Accessory,
            CategoryDto::Shoes => Category::Shoes,
            CategoryDto::Other => Category::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum AvailabilityDto {
    #[oai(rename = "in-stock")]
    InStock,
    #[oai(rename = "out-of-stock")]
    OutOfStock,
    #[oai(rename = "pre-order")]
    PreOrder,
    #[oai(rename = "unknown")]
    Unknown,
}

impl From<Availability> for AvailabilityDto {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::InStock => AvailabilityDto::InStock,
            Availability::OutOfStock => AvailabilityDto::OutOfStock,
            Availability::PreOrder => AvailabilityDto::PreOrder,
            Availability::Unknown => AvailabilityDto::Unknown,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SearchProductsRequest {
    /// Free-text search keywords
    #[oai(skip_serializing_if_is_none)]
    pub keywords: Option<String>,
    /// Restrict to one normalized category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
    /// Campus occasion, e.g. "formal" or "gameday"
    #[oai(skip_serializing_if_is_none)]
    pub event_type: Option<String>,
    /// Size label
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    /// Lower price bound, decimal currency units
    #[oai(skip_serializing_if_is_none)]
    pub price_min: Option<f64>,
    /// Upper price bound, decimal currency units
    #[oai(skip_serializing_if_is_none)]
    pub price_max: Option<f64>,
    /// Brand name
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Color name
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    /// Restrict the fan-out to these retailers
    #[oai(skip_serializing_if_is_none)]
    pub retailers: Option<Vec<RetailerDto>>,
    /// Page size (default 20)
    #[oai(skip_serializing_if_is_none)]
    pub limit: Option<u64>,
    /// Page offset into the merged result list
    #[oai(skip_serializing_if_is_none)]
    pub offset: Option<u64>,
}

impl SearchProductsRequest {
    pub fn into_filters(self) -> ProductSearchFilters {
        ProductSearchFilters {
            category: self.category.map(Into::into),
            event_type: self.event_type,
            size: self.size,
            price_min: self.price_min,
            price_max: self.price_max,
            brand: self.brand,
            color: self.color,
            keywords: self.keywords,
            retailers: self
                .retailers
                .map(|list| list.into_iter().map(Into::into).collect()),
            limit: self.limit.map(|value| value as usize),
            offset: self.offset.map(|value| value as usize),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductDto {
    /// Retailer-scoped identifier
    pub product_id: String,
    /// Identifier in the retailer's own catalog
    pub source_id: String,
    pub retailer: RetailerDto,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Never empty; a placeholder is substituted when the retailer had none
    pub images: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Decimal currency units
    pub price: f64,
    pub currency: String,
    pub availability: AvailabilityDto,
    pub product_url: String,
    #[oai(skip_serializing_if_is_none)]
    pub affiliate_url: Option<String>,
    pub category: CategoryDto,
    #[oai(skip_serializing_if_is_none)]
    pub sizes: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub colors: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub tags: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub event_types: Option<Vec<String>>,
    pub imported_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            source_id: product.source_id,
            retailer: product.retailer.into(),
            title: product.title,
            description: product.description,
            images: product.images,
            brand: product.brand,
            price: product.price,
            currency: product.currency,
            availability: product.availability.into(),
            product_url: product.product_url,
            affiliate_url: product.affiliate_url,
            category: product.category.into(),
            sizes: product.sizes,
            colors: product.colors,
            tags: product.tags,
            event_types: product.event_types,
            imported_at: product.imported_at,
            last_updated: product.last_updated,
        }
    }
}

/// The standard search shape: `products`, `total` and `has_more` are
/// always present, so callers can destructure it even when `error` is
/// set.
#[derive(Debug, Clone, Object)]
pub struct ProductSearchResultDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub has_more: bool,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl ProductSearchResultDto {
    pub fn from_result(result: ProductSearchResult) -> Self {
        Self {
            products: result.products.into_iter().map(Into::into).collect(),
            total: result.total as u64,
            has_more: result.has_more,
            error: None,
        }
    }

    pub fn empty_with_error(message: &str) -> Self {
        Self {
            products: Vec::new(),
            total: 0,
            has_more: false,
            error: Some(message.to_string()),
        }
    }
}
