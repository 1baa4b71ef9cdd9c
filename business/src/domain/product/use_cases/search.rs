use async_trait::async_trait;

use crate::domain::product::filters::{ProductSearchFilters, ProductSearchResult};

/// Fans a search out to every targeted aggregator, merges the partial
/// results and paginates. Never fails: failed branches contribute empty
/// results, so the worst case is an empty page.
#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, filters: ProductSearchFilters) -> ProductSearchResult;
}
