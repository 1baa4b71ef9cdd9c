use async_trait::async_trait;

use crate::domain::errors::AggregatorError;

use super::filters::{ProductSearchFilters, ProductSearchResult};
use super::model::Product;
use super::value_objects::Retailer;

/// Port for one external retailer's search API.
///
/// Implementations rate-limit their own outgoing calls and absorb
/// transport or parsing failures locally, degrading to an empty result
/// (`search`) or `Ok(None)` (`get_product`) after logging. The error
/// channel exists so the registry-level join stays failure tolerant even
/// against an implementation that does surface an error, and so an
/// adapter invoked without credentials can signal `Unavailable`.
#[async_trait]
pub trait ProductAggregator: Send + Sync {
    fn retailer(&self) -> Retailer;

    /// True only when the adapter is feature-enabled and holds the
    /// credentials it needs. The registry drops adapters that fail this.
    fn is_available(&self) -> bool;

    async fn search(
        &self,
        filters: &ProductSearchFilters,
    ) -> Result<ProductSearchResult, AggregatorError>;

    async fn get_product(&self, product_id: &str) -> Result<Option<Product>, AggregatorError>;
}
