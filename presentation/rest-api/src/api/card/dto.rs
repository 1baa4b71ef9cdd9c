use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::card::model::{CardSearchQuery, OutfitCard, ProductLink};

use crate::api::product::dto::RetailerDto;

/// Loose filter shape as the UI sends it; enum values are plain strings
/// and anything unparseable is dropped server side.
#[derive(Debug, Clone, Object)]
pub struct CardSearchRequest {
    #[oai(skip_serializing_if_is_none)]
    pub query: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub event_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price_min: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub price_max: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub retailers: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub limit: Option<u64>,
    #[oai(skip_serializing_if_is_none)]
    pub offset: Option<u64>,
}

impl From<CardSearchRequest> for CardSearchQuery {
    fn from(request: CardSearchRequest) -> Self {
        CardSearchQuery {
            query: request.query,
            category: request.category,
            event_type: request.event_type,
            size: request.size,
            price_min: request.price_min,
            price_max: request.price_max,
            brand: request.brand,
            color: request.color,
            retailers: request.retailers,
            limit: request.limit.map(|value| value as usize),
            offset: request.offset.map(|value| value as usize),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductLinkDto {
    pub url: String,
    pub retailer: RetailerDto,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub affiliate_url: Option<String>,
}

impl From<ProductLink> for ProductLinkDto {
    fn from(link: ProductLink) -> Self {
        Self {
            url: link.url,
            retailer: link.retailer.into(),
            price: link.price,
            affiliate_url: link.affiliate_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CardOwnerDto {
    pub display_name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OutfitCardDto {
    pub id: String,
    pub images: Vec<String>,
    pub title: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    /// Always false for aggregated retail items
    pub is_rentable: bool,
    pub product_links: Vec<ProductLinkDto>,
    pub source: String,
    pub owner: CardOwnerDto,
}

impl From<OutfitCard> for OutfitCardDto {
    fn from(card: OutfitCard) -> Self {
        Self {
            id: card.id,
            images: card.images,
            title: card.title,
            price: card.price,
            brand: card.brand,
            is_rentable: card.is_rentable,
            product_links: card.product_links.into_iter().map(Into::into).collect(),
            source: card.source,
            owner: CardOwnerDto {
                display_name: card.owner.display_name,
                avatar_url: card.owner.avatar_url,
            },
        }
    }
}
