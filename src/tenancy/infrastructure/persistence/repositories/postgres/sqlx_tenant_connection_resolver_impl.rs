use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::debug;

use crate::tenancy::{
    domain::model::{
        enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
    },
    infrastructure::persistence::repositories::{
        tenant_connection_resolver::TenantConnectionResolver,
        tenant_directory_repository::TenantDirectoryRepository,
        tenant_pool_cache_repository::TenantPoolCacheRepository,
    },
};

/// Turns a tenant's pool into the connection type a bounded context works with.
pub type TenantConnector<C> = Arc<dyn Fn(TenantId, PgPool) -> C + Send + Sync>;

pub struct SqlxTenantConnectionResolverImpl<C> {
    tenant_directory: Arc<dyn TenantDirectoryRepository>,
    tenant_pool_cache: Arc<dyn TenantPoolCacheRepository>,
    resolved_urls: RwLock<HashMap<TenantId, String>>,
    connector: TenantConnector<C>,
}

impl<C> SqlxTenantConnectionResolverImpl<C> {
    pub fn new(
        tenant_directory: Arc<dyn TenantDirectoryRepository>,
        tenant_pool_cache: Arc<dyn TenantPoolCacheRepository>,
        connector: TenantConnector<C>,
    ) -> Self {
        Self {
            tenant_directory,
            tenant_pool_cache,
            resolved_urls: RwLock::new(HashMap::new()),
            connector,
        }
    }

    async fn resolve_database_url(
        &self,
        tenant_id: &TenantId,
    ) -> Result<String, TenancyDomainError> {
        if let Some(url) = self.resolved_urls.read().await.get(tenant_id) {
            return Ok(url.clone());
        }

        let url = self
            .tenant_directory
            .resolve_database_url(tenant_id)
            .await?;

        // First resolution wins so a tenant never moves partitions mid-process.
        let mut write_guard = self.resolved_urls.write().await;
        let url = write_guard.entry(*tenant_id).or_insert(url).clone();
        debug!(tenant_id = %tenant_id, "tenant partition resolved");
        Ok(url)
    }
}

#[async_trait]
impl<C: Send + 'static> TenantConnectionResolver<C> for SqlxTenantConnectionResolverImpl<C> {
    async fn get_db(&self, tenant_id: &TenantId) -> Result<C, TenancyDomainError> {
        let database_url = self.resolve_database_url(tenant_id).await?;
        let pool = self
            .tenant_pool_cache
            .get_or_create_pool(&database_url)
            .await?;

        Ok((self.connector)(*tenant_id, pool))
    }
}
