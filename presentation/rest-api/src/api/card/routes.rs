use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::card::use_cases::search::SearchOutfitCardsUseCase;

use crate::api::card::dto::{CardSearchRequest, OutfitCardDto};
use crate::api::tags::ApiTags;

pub struct CardApi {
    search_use_case: Arc<dyn SearchOutfitCardsUseCase>,
}

impl CardApi {
    pub fn new(search_use_case: Arc<dyn SearchOutfitCardsUseCase>) -> Self {
        Self { search_use_case }
    }
}

/// Card search API for the outfit grid
#[OpenApi]
impl CardApi {
    /// Search aggregated products as display-ready cards
    ///
    /// Accepts the UI's loose filter shape and returns card records with
    /// synthetic retailer owners. Aggregated cards are never rentable.
    #[oai(path = "/cards/search", method = "post", tag = "ApiTags::Cards")]
    async fn search_cards(&self, body: Json<CardSearchRequest>) -> Json<Vec<OutfitCardDto>> {
        let cards = self.search_use_case.execute(body.0.into()).await;
        Json(cards.into_iter().map(Into::into).collect())
    }
}
