use async_trait::async_trait;

use crate::tenancy::domain::model::{
    enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
};

/// Resolves the connection bound to a tenant's partition.
///
/// Implementations must hand out a connection to the same partition for a
/// given tenant for the whole lifetime of the process, and must fail for
/// unknown tenants instead of falling back to a shared database.
#[async_trait]
pub trait TenantConnectionResolver<C: Send + 'static>: Send + Sync {
    async fn get_db(&self, tenant_id: &TenantId) -> Result<C, TenancyDomainError>;
}
