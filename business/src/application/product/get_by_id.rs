use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::registry::AggregatorRegistry;
use crate::domain::product::use_cases::get_by_id::{GetProductParams, GetProductUseCase};

pub struct GetProductUseCaseImpl {
    pub registry: Arc<AggregatorRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductUseCase for GetProductUseCaseImpl {
    async fn execute(&self, params: GetProductParams) -> Option<Product> {
        if let Some(retailer) = params.retailer {
            let Some(aggregator) = self.registry.get(retailer) else {
                self.logger.warn(&format!(
                    "Product lookup against unregistered retailer: {}",
                    retailer
                ));
                return None;
            };
            return match aggregator.get_product(&params.product_id).await {
                Ok(product) => product,
                Err(err) => {
                    self.logger
                        .warn(&format!("Lookup against {} failed: {}", retailer, err));
                    None
                }
            };
        }

        // No retailer given: walk the registry in registration order and
        // stop at the first hit.
        for aggregator in self.registry.iter() {
            match aggregator.get_product(&params.product_id).await {
                Ok(Some(product)) => return Some(product),
                Ok(None) => {}
                Err(err) => {
                    self.logger.warn(&format!(
                        "Lookup against {} failed: {}",
                        aggregator.retailer(),
                        err
                    ));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AggregatorError;
    use crate::domain::product::aggregator::ProductAggregator;
    use crate::domain::product::filters::{ProductSearchFilters, ProductSearchResult};
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::value_objects::{Availability, Category, Retailer};
    use mockall::mock;

    mock! {
        pub Agg {}

        #[async_trait]
        impl ProductAggregator for Agg {
            fn retailer(&self) -> Retailer;
            fn is_available(&self) -> bool;
            async fn search(
                &self,
                filters: &ProductSearchFilters,
            ) -> Result<ProductSearchResult, AggregatorError>;
            async fn get_product(
                &self,
                product_id: &str,
            ) -> Result<Option<Product>, AggregatorError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_product(retailer: Retailer, source_id: &str) -> Product {
        Product::new(NewProductProps {
            source_id: source_id.to_string(),
            retailer,
            title: "Corduroy Jacket".to_string(),
            description: None,
            images: vec![],
            brand: None,
            price: 30.0,
            currency: "USD".to_string(),
            availability: Availability::InStock,
            product_url: format!("https://example.com/{}", source_id),
            affiliate_url: None,
            category: Category::Top,
            sizes: None,
            colors: None,
            tags: None,
            event_types: None,
        })
    }

    fn use_case(aggregators: Vec<Arc<dyn ProductAggregator>>) -> GetProductUseCaseImpl {
        GetProductUseCaseImpl {
            registry: Arc::new(AggregatorRegistry::new(aggregators)),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_none_without_calling_anyone_when_retailer_not_registered() {
        let mut ebay = MockAgg::new();
        ebay.expect_retailer().return_const(Retailer::Ebay);
        ebay.expect_is_available().return_const(true);
        ebay.expect_get_product().times(0);

        let result = use_case(vec![Arc::new(ebay)])
            .execute(GetProductParams {
                product_id: "XYZ123".to_string(),
                retailer: Some(Retailer::Amazon),
            })
            .await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_delegate_to_the_named_retailer_only() {
        let mut amazon = MockAgg::new();
        amazon.expect_retailer().return_const(Retailer::Amazon);
        amazon.expect_is_available().return_const(true);
        amazon
            .expect_get_product()
            .withf(|id| id == "amazon-B0X")
            .returning(|_| Ok(Some(sample_product(Retailer::Amazon, "B0X"))));

        let mut ebay = MockAgg::new();
        ebay.expect_retailer().return_const(Retailer::Ebay);
        ebay.expect_is_available().return_const(true);
        ebay.expect_get_product().times(0);

        let result = use_case(vec![Arc::new(amazon), Arc::new(ebay)])
            .execute(GetProductParams {
                product_id: "amazon-B0X".to_string(),
                retailer: Some(Retailer::Amazon),
            })
            .await;

        assert_eq!(result.unwrap().source_id, "B0X");
    }

    #[tokio::test]
    async fn should_scan_registration_order_until_first_hit() {
        let mut amazon = MockAgg::new();
        amazon.expect_retailer().return_const(Retailer::Amazon);
        amazon.expect_is_available().return_const(true);
        amazon.expect_get_product().returning(|_| Ok(None));

        let mut ebay = MockAgg::new();
        ebay.expect_retailer().return_const(Retailer::Ebay);
        ebay.expect_is_available().return_const(true);
        ebay.expect_get_product()
            .returning(|_| Ok(Some(sample_product(Retailer::Ebay, "12345"))));

        let result = use_case(vec![Arc::new(amazon), Arc::new(ebay)])
            .execute(GetProductParams {
                product_id: "ebay-12345".to_string(),
                retailer: None,
            })
            .await;

        assert_eq!(result.unwrap().retailer, Retailer::Ebay);
    }

    #[tokio::test]
    async fn should_skip_erroring_aggregator_during_scan() {
        let mut amazon = MockAgg::new();
        amazon.expect_retailer().return_const(Retailer::Amazon);
        amazon.expect_is_available().return_const(true);
        amazon
            .expect_get_product()
            .returning(|_| Err(AggregatorError::Transport("timeout".to_string())));

        let mut ebay = MockAgg::new();
        ebay.expect_retailer().return_const(Retailer::Ebay);
        ebay.expect_is_available().return_const(true);
        ebay.expect_get_product()
            .returning(|_| Ok(Some(sample_product(Retailer::Ebay, "12345"))));

        let result = use_case(vec![Arc::new(amazon), Arc::new(ebay)])
            .execute(GetProductParams {
                product_id: "ebay-12345".to_string(),
                retailer: None,
            })
            .await;

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn should_return_none_when_no_aggregator_has_the_product() {
        let mut amazon = MockAgg::new();
        amazon.expect_retailer().return_const(Retailer::Amazon);
        amazon.expect_is_available().return_const(true);
        amazon.expect_get_product().returning(|_| Ok(None));

        let result = use_case(vec![Arc::new(amazon)])
            .execute(GetProductParams {
                product_id: "missing".to_string(),
                retailer: None,
            })
            .await;

        assert!(result.is_none());
    }
}
