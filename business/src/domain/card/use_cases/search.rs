use async_trait::async_trait;

use crate::domain::card::model::{CardSearchQuery, OutfitCard};

/// UI-facing search: translates a loose filter shape into the canonical
/// contract and returns display-ready card records.
#[async_trait]
pub trait SearchOutfitCardsUseCase: Send + Sync {
    async fn execute(&self, query: CardSearchQuery) -> Vec<OutfitCard>;
}
