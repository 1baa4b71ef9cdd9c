use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::domain::logger::Logger;
use crate::domain::product::filters::{ProductSearchFilters, ProductSearchResult};
use crate::domain::product::model::Product;
use crate::domain::product::registry::AggregatorRegistry;
use crate::domain::product::use_cases::search::SearchProductsUseCase;
use crate::domain::product::value_objects::Availability;

pub struct SearchProductsUseCaseImpl {
    pub registry: Arc<AggregatorRegistry>,
    pub logger: Arc<dyn Logger>,
}

/// In-stock items sort before every other availability state; price is
/// always the tiebreak, whether or not a price filter was supplied.
/// Stable, so equal-priced items keep their merge order.
fn sort_products(products: &mut [Product]) {
    products.sort_by(|a, b| {
        let a_restocked = a.availability != Availability::InStock;
        let b_restocked = b.availability != Availability::InStock;
        a_restocked
            .cmp(&b_restocked)
            .then(a.price.total_cmp(&b.price))
    });
}

/// Slices one page out of the merged, sorted list. `has_more` holds
/// exactly when a further offset would still yield records.
fn paginate(merged: Vec<Product>, offset: usize, limit: usize) -> (Vec<Product>, bool) {
    let merged_len = merged.len();
    let page: Vec<Product> = merged.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < merged_len;
    (page, has_more)
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, filters: ProductSearchFilters) -> ProductSearchResult {
        let targets = self.registry.select(filters.retailers.as_deref());
        if targets.is_empty() {
            self.logger
                .warn("Product search with no registered aggregator in target set");
            return ProductSearchResult::empty();
        }

        self.logger.info(&format!(
            "Fanning product search out to {} aggregator(s)",
            targets.len()
        ));

        // All branches are issued together; a failing one contributes an
        // empty partial result and never aborts its siblings.
        let filters_ref = &filters;
        let partials = join_all(targets.into_iter().map(|aggregator| async move {
            match aggregator.search(filters_ref).await {
                Ok(result) => result,
                Err(err) => {
                    self.logger.warn(&format!(
                        "Search against {} failed: {}",
                        aggregator.retailer(),
                        err
                    ));
                    ProductSearchResult::empty()
                }
            }
        }))
        .await;

        let mut total = 0;
        let mut merged: Vec<Product> = Vec::new();
        for partial in partials {
            total += partial.total;
            merged.extend(partial.products);
        }

        sort_products(&mut merged);
        let (products, has_more) = paginate(merged, filters.offset(), filters.limit());

        self.logger.info(&format!(
            "Merged search returned {} of {} product(s)",
            products.len(),
            total
        ));

        ProductSearchResult {
            products,
            total,
            has_more,
        }
    }
}
