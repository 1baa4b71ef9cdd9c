use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::registry::AggregatorRegistry;
use crate::domain::product::use_cases::list_retailers::ListRetailersUseCase;
use crate::domain::product::value_objects::Retailer;

pub struct ListRetailersUseCaseImpl {
    pub registry: Arc<AggregatorRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRetailersUseCase for ListRetailersUseCaseImpl {
    async fn execute(&self) -> Vec<Retailer> {
        let retailers = self.registry.retailers();
        self.logger
            .debug(&format!("{} retailer(s) registered", retailers.len()));
        retailers
    }
}
