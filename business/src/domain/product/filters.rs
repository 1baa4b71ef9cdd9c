use serde::{Deserialize, Serialize};

use super::model::Product;
use super::value_objects::{Category, Retailer};

/// Applied when a caller does not set an explicit page size.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Query contract accepted by aggregators and the search service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSearchFilters {
    pub category: Option<Category>,
    /// Free text; expanded into retailer keyword hints internally.
    pub event_type: Option<String>,
    pub size: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub keywords: Option<String>,
    /// Restricts the fan-out to a subset of registered retailers.
    pub retailers: Option<Vec<Retailer>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ProductSearchFilters {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSearchResult {
    /// Already paginated, sort order applied by the producer.
    pub products: Vec<Product>,
    /// Count across all contributing aggregators, not the page length.
    pub total: usize,
    pub has_more: bool,
}

impl ProductSearchResult {
    /// The shape every failure path degrades to.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            total: 0,
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_limit_and_offset() {
        let filters = ProductSearchFilters::default();
        assert_eq!(filters.limit(), DEFAULT_SEARCH_LIMIT);
        assert_eq!(filters.offset(), 0);
    }

    #[test]
    fn should_honor_explicit_limit_and_offset() {
        let filters = ProductSearchFilters {
            limit: Some(5),
            offset: Some(40),
            ..Default::default()
        };
        assert_eq!(filters.limit(), 5);
        assert_eq!(filters.offset(), 40);
    }

    #[test]
    fn should_build_empty_result_shape() {
        let result = ProductSearchResult::empty();
        assert!(result.products.is_empty());
        assert_eq!(result.total, 0);
        assert!(!result.has_more);
    }
}
