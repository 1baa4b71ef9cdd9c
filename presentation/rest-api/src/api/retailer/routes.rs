use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::list_retailers::ListRetailersUseCase;
use business::domain::product::value_objects::Retailer;

use crate::api::product::dto::RetailerDto;
use crate::api::tags::ApiTags;

pub struct RetailerApi {
    list_use_case: Arc<dyn ListRetailersUseCase>,
}

impl RetailerApi {
    pub fn new(list_use_case: Arc<dyn ListRetailersUseCase>) -> Self {
        Self { list_use_case }
    }
}

/// Retailer availability API
#[OpenApi]
impl RetailerApi {
    /// List available retailers
    ///
    /// A retailer appears here only when its aggregator is enabled and
    /// credentialed, in registration order.
    #[oai(path = "/retailers", method = "get", tag = "ApiTags::Retailers")]
    async fn list_retailers(&self) -> Json<Vec<RetailerDto>> {
        let retailers = self.list_use_case.execute().await;
        Json(retailers.into_iter().map(Into::into).collect())
    }

    /// Check one retailer's availability
    ///
    /// Unknown retailer names are simply reported unavailable.
    #[oai(
        path = "/retailers/:name/available",
        method = "get",
        tag = "ApiTags::Retailers"
    )]
    async fn is_retailer_available(&self, name: Path<String>) -> Json<bool> {
        let Ok(retailer) = name.0.parse::<Retailer>() else {
            return Json(false);
        };
        Json(self.list_use_case.execute().await.contains(&retailer))
    }
}
