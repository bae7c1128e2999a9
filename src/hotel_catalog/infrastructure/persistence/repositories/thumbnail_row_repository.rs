use async_trait::async_trait;

use crate::hotel_catalog::domain::model::{
    entities::thumbnail::{NewThumbnail, Thumbnail},
    enums::hotel_domain_error::HotelDomainError,
    value_objects::hotel_id::HotelId,
};

#[async_trait]
pub trait ThumbnailRowRepository: Send + Sync {
    async fn insert(&self, thumbnail: &NewThumbnail) -> Result<Thumbnail, HotelDomainError>;

    async fn list_by_hotel(&self, hotel_id: HotelId) -> Result<Vec<Thumbnail>, HotelDomainError>;
}
