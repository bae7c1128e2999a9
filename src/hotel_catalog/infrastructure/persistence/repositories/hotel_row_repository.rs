use async_trait::async_trait;

use crate::{
    hotel_catalog::domain::model::{
        entities::hotel::{Hotel, HotelDraft, HotelPatch},
        enums::hotel_domain_error::HotelDomainError,
        value_objects::{hotel_id::HotelId, hotel_name::HotelName},
    },
    shared::infrastructure::persistence::pagination::{PaginatedResult, PaginationFilter},
};

/// Hotel rows of a single tenant partition.
#[async_trait]
pub trait HotelRowRepository: Send + Sync {
    async fn insert(&self, draft: &HotelDraft) -> Result<Hotel, HotelDomainError>;

    async fn update(
        &self,
        hotel_id: HotelId,
        patch: &HotelPatch,
    ) -> Result<Option<Hotel>, HotelDomainError>;

    /// Grades are loaded with the hotel.
    async fn find_by_id(&self, hotel_id: HotelId) -> Result<Option<Hotel>, HotelDomainError>;

    async fn delete(&self, hotel_id: HotelId) -> Result<bool, HotelDomainError>;

    async fn paginate(
        &self,
        filter: &PaginationFilter,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError>;

    async fn count_by_name(&self, name: &HotelName) -> Result<i64, HotelDomainError>;
}
