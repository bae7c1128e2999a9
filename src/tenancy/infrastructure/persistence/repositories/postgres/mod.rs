pub mod sqlx_tenant_connection_resolver_impl;
pub mod sqlx_tenant_directory_repository_impl;
pub mod sqlx_tenant_pool_cache_repository_impl;
