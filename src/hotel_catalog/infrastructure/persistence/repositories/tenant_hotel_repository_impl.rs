use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::{
    hotel_catalog::{
        domain::model::{
            entities::{
                hotel::{Hotel, HotelDraft, HotelPatch},
                thumbnail::{NewThumbnail, Thumbnail},
            },
            enums::hotel_domain_error::HotelDomainError,
            value_objects::{hotel_id::HotelId, hotel_name::HotelName},
        },
        infrastructure::persistence::repositories::{
            hotel_catalog_connection::HotelCatalogConnection, hotel_repository::HotelRepository,
            thumbnail_row_repository::ThumbnailRowRepository,
        },
    },
    shared::infrastructure::{
        persistence::pagination::{PaginatedResult, PaginationFilter},
        storage::file_transferer::{FileTransferer, UploadFile},
    },
    tenancy::{
        domain::model::value_objects::tenant_id::TenantId,
        infrastructure::persistence::repositories::tenant_connection_resolver::TenantConnectionResolver,
    },
};

pub struct TenantHotelRepositoryImpl {
    connection_resolver: Arc<dyn TenantConnectionResolver<HotelCatalogConnection>>,
    file_transferer: Arc<dyn FileTransferer>,
    bucket_name: String,
    upload_path: String,
}

impl TenantHotelRepositoryImpl {
    pub fn new(
        connection_resolver: Arc<dyn TenantConnectionResolver<HotelCatalogConnection>>,
        file_transferer: Arc<dyn FileTransferer>,
        bucket_name: String,
        upload_path: String,
    ) -> Self {
        Self {
            connection_resolver,
            file_transferer,
            bucket_name,
            upload_path,
        }
    }

    async fn connection(
        &self,
        tenant_id: &TenantId,
    ) -> Result<HotelCatalogConnection, HotelDomainError> {
        Ok(self.connection_resolver.get_db(tenant_id).await?)
    }
}

#[async_trait]
impl HotelRepository for TenantHotelRepositoryImpl {
    async fn create(
        &self,
        tenant_id: &TenantId,
        draft: HotelDraft,
        thumbnails: Vec<Option<UploadFile>>,
    ) -> Result<Hotel, HotelDomainError> {
        let connection = self.connection(tenant_id).await?;
        let hotel = connection.hotels.insert(&draft).await?;

        info!(tenant_id = %connection.tenant_id, hotel_id = %hotel.id(), "hotel created");

        let files: Vec<UploadFile> = thumbnails.into_iter().flatten().collect();
        if files.is_empty() {
            return Ok(hotel);
        }

        // Detached so an abandoned request still waits for every upload.
        let fan_out = tokio::spawn(upload_thumbnails(
            connection.tenant_id,
            hotel.id(),
            files,
            connection.thumbnails,
            self.file_transferer.clone(),
            self.bucket_name.clone(),
            self.upload_path.clone(),
        ));

        let mut committed = fan_out
            .await
            .map_err(|e| HotelDomainError::InfrastructureError(e.to_string()))??;
        committed.sort_by_key(Thumbnail::id);

        Ok(hotel.with_thumbnails(committed))
    }

    async fn update(
        &self,
        tenant_id: &TenantId,
        hotel_id: HotelId,
        patch: &HotelPatch,
    ) -> Result<Option<Hotel>, HotelDomainError> {
        let connection = self.connection(tenant_id).await?;
        connection.hotels.update(hotel_id, patch).await
    }

    async fn find(
        &self,
        tenant_id: &TenantId,
        hotel_id: HotelId,
    ) -> Result<Option<Hotel>, HotelDomainError> {
        let connection = self.connection(tenant_id).await?;
        let Some(hotel) = connection.hotels.find_by_id(hotel_id).await? else {
            return Ok(None);
        };

        let thumbnails = connection.thumbnails.list_by_hotel(hotel_id).await?;
        Ok(Some(hotel.with_thumbnails(thumbnails)))
    }

    async fn find_all(
        &self,
        tenant_id: &TenantId,
        filter: &PaginationFilter,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError> {
        let connection = self.connection(tenant_id).await?;
        connection.hotels.paginate(filter).await
    }

    async fn delete(
        &self,
        tenant_id: &TenantId,
        hotel_id: HotelId,
    ) -> Result<bool, HotelDomainError> {
        let connection = self.connection(tenant_id).await?;
        let deleted = connection.hotels.delete(hotel_id).await?;

        if deleted {
            info!(tenant_id = %connection.tenant_id, hotel_id = %hotel_id, "hotel deleted");
        }
        Ok(deleted)
    }

    async fn has_repeat_data(
        &self,
        tenant_id: &TenantId,
        name: &HotelName,
    ) -> Result<(), HotelDomainError> {
        let connection = self.connection(tenant_id).await?;
        if connection.hotels.count_by_name(name).await? > 0 {
            return Err(HotelDomainError::HotelNameAlreadyExists);
        }
        Ok(())
    }
}

/// Runs one task per file and waits for all of them. Returns the committed
/// thumbnails, or the first failure observed once every task has finished.
async fn upload_thumbnails(
    tenant_id: TenantId,
    hotel_id: HotelId,
    files: Vec<UploadFile>,
    thumbnails: Arc<dyn ThumbnailRowRepository>,
    file_transferer: Arc<dyn FileTransferer>,
    bucket_name: String,
    upload_path: String,
) -> Result<Vec<Thumbnail>, HotelDomainError> {
    let mut tasks = JoinSet::new();

    for file in files {
        let thumbnails = thumbnails.clone();
        let file_transferer = file_transferer.clone();
        let bucket_name = bucket_name.clone();
        let upload_path = upload_path.clone();

        tasks.spawn(async move {
            let uploaded = file_transferer
                .upload(&bucket_name, &upload_path, file)
                .await?;

            thumbnails
                .insert(&NewThumbnail {
                    hotel_id,
                    bucket_name: uploaded.bucket_name,
                    file_name: uploaded.file_name,
                    version_id: uploaded.version_id,
                    file_size: uploaded.file_size,
                })
                .await
        });
    }

    let mut committed = Vec::with_capacity(tasks.len());
    let mut first_error: Option<HotelDomainError> = None;

    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(|e| HotelDomainError::InfrastructureError(format!("upload task failed: {e}")))
            .and_then(|result| result);

        match outcome {
            Ok(thumbnail) => {
                debug!(
                    tenant_id = %tenant_id,
                    hotel_id = %hotel_id,
                    file_name = thumbnail.file_name(),
                    "thumbnail committed"
                );
                committed.push(thumbnail);
            }
            Err(error) => {
                warn!(
                    tenant_id = %tenant_id,
                    hotel_id = %hotel_id,
                    bucket = %bucket_name,
                    error = %error,
                    "thumbnail upload failed"
                );
                first_error.get_or_insert(error);
            }
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(committed),
    }
}
