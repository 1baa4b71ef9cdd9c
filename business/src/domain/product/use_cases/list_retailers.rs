use async_trait::async_trait;

use crate::domain::product::value_objects::Retailer;

/// Reports which retailers are registered and usable, in registration
/// order. Per-retailer availability probes are answered from this list.
#[async_trait]
pub trait ListRetailersUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Retailer>;
}
