use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use sqlx::{PgPool, migrate, postgres::PgPoolOptions};
use tokio::sync::RwLock;
use tracing::info;

use crate::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::persistence::repositories::tenant_pool_cache_repository::TenantPoolCacheRepository,
};

pub struct SqlxTenantPoolCacheRepositoryImpl {
    pools: Arc<RwLock<HashMap<String, PgPool>>>,
    max_connections: u32,
    auto_migrate: bool,
}

impl SqlxTenantPoolCacheRepositoryImpl {
    pub fn new(max_connections: u32, auto_migrate: bool) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
            max_connections,
            auto_migrate,
        }
    }

    async fn connect(&self, database_url: &str) -> Result<PgPool, TenancyDomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(database_url)
            .await
            .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;

        if self.auto_migrate {
            migrate!("./migrations/tenant")
                .run(&pool)
                .await
                .map_err(|e| TenancyDomainError::InfrastructureError(e.to_string()))?;
        }

        Ok(pool)
    }
}

#[async_trait]
impl TenantPoolCacheRepository for SqlxTenantPoolCacheRepositoryImpl {
    async fn get_or_create_pool(&self, database_url: &str) -> Result<PgPool, TenancyDomainError> {
        {
            let read_guard = self.pools.read().await;
            if let Some(pool) = read_guard.get(database_url) {
                return Ok(pool.clone());
            }
        }

        let pool = self.connect(database_url).await?;

        let mut write_guard = self.pools.write().await;
        if let Some(existing) = write_guard.get(database_url) {
            // Lost the race against a concurrent first use; keep the winner.
            pool.close().await;
            return Ok(existing.clone());
        }

        info!(
            pools = write_guard.len() + 1,
            "tenant connection pool created"
        );
        write_guard.insert(database_url.to_string(), pool.clone());
        Ok(pool)
    }

    async fn close_all(&self) {
        let pools = std::mem::take(&mut *self.pools.write().await);
        if pools.is_empty() {
            return;
        }

        for pool in pools.values() {
            pool.close().await;
        }
        info!(closed = pools.len(), "tenant connection pools closed");
    }
}
