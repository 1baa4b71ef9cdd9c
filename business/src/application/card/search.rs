use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::model::{CardSearchQuery, OutfitCard};
use crate::domain::card::use_cases::search::SearchOutfitCardsUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::search::SearchProductsUseCase;

pub struct SearchOutfitCardsUseCaseImpl {
    pub products: Arc<dyn SearchProductsUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchOutfitCardsUseCase for SearchOutfitCardsUseCaseImpl {
    async fn execute(&self, query: CardSearchQuery) -> Vec<OutfitCard> {
        let filters = query.into_filters();
        let result = self.products.execute(filters).await;
        self.logger.info(&format!(
            "Mapped {} aggregated product(s) into cards",
            result.products.len()
        ));
        result
            .products
            .into_iter()
            .map(OutfitCard::from_product)
            .collect()
    }
}
