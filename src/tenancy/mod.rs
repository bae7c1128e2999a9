use std::sync::Arc;

use crate::{
    shared::app_context::AppContext,
    tenancy::infrastructure::persistence::repositories::{
        postgres::sqlx_tenant_connection_resolver_impl::{
            SqlxTenantConnectionResolverImpl, TenantConnector,
        },
        tenant_connection_resolver::TenantConnectionResolver,
    },
};

pub mod domain;
pub mod infrastructure;

/// Resolver over the shared tenant directory and pool cache; each bounded
/// context supplies the connector that wraps a tenant pool.
pub fn build_tenant_connection_resolver<C: Send + 'static>(
    context: &AppContext,
    connector: TenantConnector<C>,
) -> Arc<dyn TenantConnectionResolver<C>> {
    Arc::new(SqlxTenantConnectionResolverImpl::new(
        context.tenant_directory.clone(),
        context.tenant_pool_cache.clone(),
        connector,
    ))
}
