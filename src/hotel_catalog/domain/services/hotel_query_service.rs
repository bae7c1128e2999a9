use async_trait::async_trait;

use crate::{
    hotel_catalog::domain::model::{
        entities::hotel::Hotel,
        enums::hotel_domain_error::HotelDomainError,
        queries::{get_hotel_query::GetHotelQuery, list_hotels_query::ListHotelsQuery},
    },
    shared::infrastructure::persistence::pagination::PaginatedResult,
};

#[async_trait]
pub trait HotelQueryService: Send + Sync {
    /// `Ok(None)` when the hotel does not exist in the tenant's partition.
    async fn handle_get(&self, query: GetHotelQuery) -> Result<Option<Hotel>, HotelDomainError>;

    async fn handle_list(
        &self,
        query: ListHotelsQuery,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError>;
}
