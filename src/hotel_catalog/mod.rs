use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use sqlx::PgPool;

use crate::{
    hotel_catalog::{
        application::{
            command_services::hotel_command_service_impl::HotelCommandServiceImpl,
            query_services::hotel_query_service_impl::HotelQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            hotel_catalog_connection::HotelCatalogConnection,
            postgres::{
                sqlx_hotel_row_repository_impl::SqlxHotelRowRepositoryImpl,
                sqlx_thumbnail_row_repository_impl::SqlxThumbnailRowRepositoryImpl,
            },
            tenant_hotel_repository_impl::TenantHotelRepositoryImpl,
        },
        interfaces::rest::controllers::hotel_rest_controller::{HotelRestControllerState, router},
    },
    shared::app_context::AppContext,
    tenancy::{
        build_tenant_connection_resolver,
        domain::model::value_objects::tenant_id::TenantId,
        infrastructure::persistence::repositories::postgres::sqlx_tenant_connection_resolver_impl::TenantConnector,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_hotel_catalog_router(context: &AppContext) -> Router {
    let connector: TenantConnector<HotelCatalogConnection> =
        Arc::new(|tenant_id: TenantId, pool: PgPool| HotelCatalogConnection {
            tenant_id,
            hotels: Arc::new(SqlxHotelRowRepositoryImpl::new(pool.clone())),
            thumbnails: Arc::new(SqlxThumbnailRowRepositoryImpl::new(pool)),
        });
    let connection_resolver = build_tenant_connection_resolver(context, connector);

    let hotel_repository = Arc::new(TenantHotelRepositoryImpl::new(
        connection_resolver,
        context.file_transferer.clone(),
        context.config.hotels_bucket_name.clone(),
        context.config.hotel_thumbnails_path.clone(),
    ));

    let command_service = Arc::new(HotelCommandServiceImpl::new(hotel_repository.clone()));
    let query_service = Arc::new(HotelQueryServiceImpl::new(hotel_repository));

    router(HotelRestControllerState {
        command_service,
        query_service,
    })
    .layer(DefaultBodyLimit::max(context.config.max_upload_bytes))
}
