use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    hotel_catalog::{
        domain::{
            model::{
                entities::hotel::Hotel,
                enums::hotel_domain_error::HotelDomainError,
                queries::{get_hotel_query::GetHotelQuery, list_hotels_query::ListHotelsQuery},
            },
            services::hotel_query_service::HotelQueryService,
        },
        infrastructure::persistence::repositories::hotel_repository::HotelRepository,
    },
    shared::infrastructure::persistence::pagination::PaginatedResult,
};

pub struct HotelQueryServiceImpl {
    hotel_repository: Arc<dyn HotelRepository>,
}

impl HotelQueryServiceImpl {
    pub fn new(hotel_repository: Arc<dyn HotelRepository>) -> Self {
        Self { hotel_repository }
    }
}

#[async_trait]
impl HotelQueryService for HotelQueryServiceImpl {
    async fn handle_get(&self, query: GetHotelQuery) -> Result<Option<Hotel>, HotelDomainError> {
        self.hotel_repository
            .find(query.tenant_id(), query.hotel_id())
            .await
    }

    async fn handle_list(
        &self,
        query: ListHotelsQuery,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError> {
        self.hotel_repository
            .find_all(query.tenant_id(), query.filter())
            .await
    }
}
