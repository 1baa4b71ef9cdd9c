use std::sync::Arc;

use logger::TracingLogger;
use retail::amazon::AmazonAggregator;
use retail::ebay::EbayAggregator;

use business::application::card::search::SearchOutfitCardsUseCaseImpl;
use business::application::product::get_by_id::GetProductUseCaseImpl;
use business::application::product::list_retailers::ListRetailersUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::domain::product::aggregator::ProductAggregator;
use business::domain::product::registry::AggregatorRegistry;

use crate::config::retailers_config::RetailersConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub card_api: crate::api::card::routes::CardApi,
    pub retailer_api: crate::api::retailer::routes::RetailerApi,
}

impl DependencyContainer {
    /// Builds the whole object graph once. The registry is the
    /// construct-once, reuse-everywhere piece: every use case shares the
    /// same instance for the lifetime of the process.
    pub fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters. Both are constructed; only those that
        // pass their availability probe survive registration.
        let retailers = RetailersConfig::from_env();
        let amazon = Arc::new(AmazonAggregator::new(retailers.amazon, logger.clone()));
        let ebay = Arc::new(EbayAggregator::new(retailers.ebay, logger.clone()));
        let candidates: Vec<Arc<dyn ProductAggregator>> = vec![amazon, ebay];
        let registry = Arc::new(AggregatorRegistry::new(candidates));
        tracing::info!(
            "Aggregator registry built with {} retailer(s)",
            registry.len()
        );

        // Use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            registry: registry.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetProductUseCaseImpl {
            registry: registry.clone(),
            logger: logger.clone(),
        });
        let list_retailers_use_case = Arc::new(ListRetailersUseCaseImpl {
            registry,
            logger: logger.clone(),
        });
        let card_search_use_case = Arc::new(SearchOutfitCardsUseCaseImpl {
            products: search_use_case.clone(),
            logger,
        });

        let product_api =
            crate::api::product::routes::ProductApi::new(search_use_case, get_use_case);
        let card_api = crate::api::card::routes::CardApi::new(card_search_use_case);
        let retailer_api = crate::api::retailer::routes::RetailerApi::new(list_retailers_use_case);

        Ok(Self {
            health_api,
            product_api,
            card_api,
            retailer_api,
        })
    }
}
