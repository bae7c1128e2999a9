use std::sync::Arc;

use sqlx::{PgPool, migrate};
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    shared::infrastructure::storage::{
        file_transferer::FileTransferer, s3_file_transferer_impl::S3FileTransfererImpl,
    },
    tenancy::infrastructure::persistence::repositories::{
        postgres::{
            sqlx_tenant_directory_repository_impl::SqlxTenantDirectoryRepositoryImpl,
            sqlx_tenant_pool_cache_repository_impl::SqlxTenantPoolCacheRepositoryImpl,
        },
        tenant_directory_repository::TenantDirectoryRepository,
        tenant_pool_cache_repository::TenantPoolCacheRepository,
    },
};

/// Process-wide collaborators, built once at startup and handed to each
/// bounded context's router builder.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub catalog_pool: PgPool,
    pub tenant_directory: Arc<dyn TenantDirectoryRepository>,
    pub tenant_pool_cache: Arc<dyn TenantPoolCacheRepository>,
    pub file_transferer: Arc<dyn FileTransferer>,
}

impl AppContext {
    pub async fn initialize(config: AppConfig) -> Result<Self, String> {
        let catalog_pool = PgPool::connect(&config.catalog_database_url())
            .await
            .map_err(|e| e.to_string())?;

        migrate!("./migrations/catalog")
            .run(&catalog_pool)
            .await
            .map_err(|e| e.to_string())?;

        let tenant_directory = Arc::new(SqlxTenantDirectoryRepositoryImpl::new(
            catalog_pool.clone(),
            config.clone(),
        ));
        let tenant_pool_cache = Arc::new(SqlxTenantPoolCacheRepositoryImpl::new(
            config.tenant_pool_max_connections,
            config.tenant_auto_migrate,
        ));
        let file_transferer = Arc::new(S3FileTransfererImpl::from_config(&config.object_store).await);

        info!(
            catalog_database = %config.postgres_catalog_database,
            hotels_bucket = %config.hotels_bucket_name,
            "application context initialized"
        );

        Ok(Self {
            config,
            catalog_pool,
            tenant_directory,
            tenant_pool_cache,
            file_transferer,
        })
    }

    pub async fn shutdown(&self) {
        self.tenant_pool_cache.close_all().await;
        self.catalog_pool.close().await;
    }
}
