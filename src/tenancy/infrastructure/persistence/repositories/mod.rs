pub mod postgres;
pub mod tenant_connection_resolver;
pub mod tenant_directory_repository;
pub mod tenant_pool_cache_repository;
