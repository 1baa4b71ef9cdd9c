use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, param::Query, payload::Json};

use business::domain::product::filters::ProductSearchFilters;
use business::domain::product::use_cases::get_by_id::{GetProductParams, GetProductUseCase};
use business::domain::product::use_cases::search::SearchProductsUseCase;
use business::domain::product::value_objects::{Category, Retailer};

use crate::api::error::ErrorResponse;
use crate::api::product::dto::{ProductDto, ProductSearchResultDto, SearchProductsRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_use_case: Arc<dyn GetProductUseCase>,
}

impl ProductApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_use_case: Arc<dyn GetProductUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_use_case,
        }
    }
}

#[derive(ApiResponse)]
enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

/// Aggregated product search API
///
/// Fans searches out to the registered retailer aggregators and serves
/// merged, sorted, paginated results.
#[OpenApi]
impl ProductApi {
    /// Search aggregated products
    ///
    /// Runs the search against every registered retailer (or the subset
    /// named in `retailers`) and returns one merged page.
    #[oai(path = "/products/search", method = "post", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        body: Json<SearchProductsRequest>,
    ) -> Json<ProductSearchResultDto> {
        let result = self.search_use_case.execute(body.0.into_filters()).await;
        Json(ProductSearchResultDto::from_result(result))
    }

    /// Search aggregated products via query string
    ///
    /// Loose variant of the POST endpoint: enum values arrive as plain
    /// strings and `retailers` is comma separated. An unparseable value
    /// yields the standard empty shape with `error` set instead of a
    /// failure status, so callers can always destructure the response.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    #[allow(clippy::too_many_arguments)]
    async fn search_products_by_query(
        &self,
        keywords: Query<Option<String>>,
        category: Query<Option<String>>,
        event_type: Query<Option<String>>,
        size: Query<Option<String>>,
        price_min: Query<Option<f64>>,
        price_max: Query<Option<f64>>,
        brand: Query<Option<String>>,
        color: Query<Option<String>>,
        retailers: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> Json<ProductSearchResultDto> {
        let category = match category.0 {
            Some(value) => match value.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    return Json(ProductSearchResultDto::empty_with_error(
                        "search.invalid_category",
                    ));
                }
            },
            None => None,
        };

        let retailers = match retailers.0 {
            Some(value) => {
                let mut parsed = Vec::new();
                for name in value.split(',').filter(|name| !name.trim().is_empty()) {
                    match name.trim().parse::<Retailer>() {
                        Ok(retailer) => parsed.push(retailer),
                        Err(_) => {
                            return Json(ProductSearchResultDto::empty_with_error(
                                "search.invalid_retailer",
                            ));
                        }
                    }
                }
                Some(parsed)
            }
            None => None,
        };

        let filters = ProductSearchFilters {
            category,
            event_type: event_type.0,
            size: size.0,
            price_min: price_min.0,
            price_max: price_max.0,
            brand: brand.0,
            color: color.0,
            keywords: keywords.0,
            retailers,
            limit: limit.0.map(|value| value as usize),
            offset: offset.0.map(|value| value as usize),
        };

        let result = self.search_use_case.execute(filters).await;
        Json(ProductSearchResultDto::from_result(result))
    }

    /// Get one aggregated product by id
    ///
    /// With `retailer` given, only that retailer's aggregator is asked;
    /// otherwise every registered aggregator is tried in order.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product(
        &self,
        id: Path<String>,
        retailer: Query<Option<String>>,
    ) -> GetProductResponse {
        let retailer = match retailer.0 {
            Some(name) => match name.parse::<Retailer>() {
                Ok(retailer) => Some(retailer),
                Err(_) => {
                    return GetProductResponse::BadRequest(Json(ErrorResponse::new(
                        "ValidationError",
                        "product.invalid_retailer",
                    )));
                }
            },
            None => None,
        };

        match self
            .get_use_case
            .execute(GetProductParams {
                product_id: id.0,
                retailer,
            })
            .await
        {
            Some(product) => GetProductResponse::Ok(Json(product.into())),
            None => GetProductResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "product.not_found",
            ))),
        }
    }
}
