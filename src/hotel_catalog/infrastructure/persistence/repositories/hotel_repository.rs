use async_trait::async_trait;

use crate::{
    hotel_catalog::domain::model::{
        entities::hotel::{Hotel, HotelDraft, HotelPatch},
        enums::hotel_domain_error::HotelDomainError,
        value_objects::{hotel_id::HotelId, hotel_name::HotelName},
    },
    shared::infrastructure::{
        persistence::pagination::{PaginatedResult, PaginationFilter},
        storage::file_transferer::UploadFile,
    },
    tenancy::domain::model::value_objects::tenant_id::TenantId,
};

/// Tenant-scoped persistence of the hotel aggregate.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Persists the hotel, then uploads every non-null file concurrently and
    /// records one thumbnail per successful upload.
    ///
    /// Not atomic: when an upload or thumbnail insert fails the hotel row and
    /// the thumbnails that did commit stay in place and the first failure is
    /// returned.
    async fn create(
        &self,
        tenant_id: &TenantId,
        draft: HotelDraft,
        thumbnails: Vec<Option<UploadFile>>,
    ) -> Result<Hotel, HotelDomainError>;

    async fn update(
        &self,
        tenant_id: &TenantId,
        hotel_id: HotelId,
        patch: &HotelPatch,
    ) -> Result<Option<Hotel>, HotelDomainError>;

    async fn find(
        &self,
        tenant_id: &TenantId,
        hotel_id: HotelId,
    ) -> Result<Option<Hotel>, HotelDomainError>;

    async fn find_all(
        &self,
        tenant_id: &TenantId,
        filter: &PaginationFilter,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError>;

    async fn delete(&self, tenant_id: &TenantId, hotel_id: HotelId)
    -> Result<bool, HotelDomainError>;

    /// Fails with `HotelNameAlreadyExists` when the tenant already has a hotel
    /// with this name.
    async fn has_repeat_data(
        &self,
        tenant_id: &TenantId,
        name: &HotelName,
    ) -> Result<(), HotelDomainError>;
}
