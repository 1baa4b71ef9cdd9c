use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Retailer;

pub struct GetProductParams {
    pub product_id: String,
    /// When set, only that retailer's aggregator is consulted.
    pub retailer: Option<Retailer>,
}

/// Looks a product up across the registered aggregators. Not-found and
/// lookup failure both surface as `None`.
#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, params: GetProductParams) -> Option<Product>;
}
