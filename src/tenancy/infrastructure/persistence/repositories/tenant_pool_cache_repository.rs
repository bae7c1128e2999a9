use async_trait::async_trait;
use sqlx::PgPool;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

#[async_trait]
pub trait TenantPoolCacheRepository: Send + Sync {
    async fn get_or_create_pool(&self, database_url: &str) -> Result<PgPool, TenancyDomainError>;

    /// Closes every cached pool. Called once on shutdown.
    async fn close_all(&self);
}
