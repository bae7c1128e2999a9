use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::{
    config::app_config::AppConfig,
    tenancy::{
        domain::model::{
            enums::{tenancy_domain_error::TenancyDomainError, tenant_status::TenantStatus},
            value_objects::tenant_id::TenantId,
        },
        infrastructure::persistence::repositories::tenant_directory_repository::TenantDirectoryRepository,
    },
};

pub struct SqlxTenantDirectoryRepositoryImpl {
    catalog_pool: PgPool,
    config: AppConfig,
}

impl SqlxTenantDirectoryRepositoryImpl {
    pub fn new(catalog_pool: PgPool, config: AppConfig) -> Self {
        Self {
            catalog_pool,
            config,
        }
    }
}

#[async_trait]
impl TenantDirectoryRepository for SqlxTenantDirectoryRepositoryImpl {
    async fn resolve_database_url(
        &self,
        tenant_id: &TenantId,
    ) -> Result<String, TenancyDomainError> {
        let statement = r#"
            SELECT database_name, status
            FROM tenants
            WHERE id = $1
        "#;

        let row = sqlx::query(statement)
            .bind(tenant_id.as_i64())
            .fetch_optional(&self.catalog_pool)
            .await
            .map_err(map_infra_error)?
            .ok_or(TenancyDomainError::TenantNotFound)?;

        let database_name: String = row.try_get("database_name").map_err(map_infra_error)?;
        let status_raw: String = row.try_get("status").map_err(map_infra_error)?;

        let status = TenantStatus::from_str(&status_raw).map_err(|_| {
            TenancyDomainError::InfrastructureError("unknown tenant status stored".to_string())
        })?;
        if status != TenantStatus::Active {
            return Err(TenancyDomainError::TenantInactive);
        }

        Ok(self.config.database_url_for(&database_name))
    }
}

fn map_infra_error(error: sqlx::Error) -> TenancyDomainError {
    TenancyDomainError::InfrastructureError(error.to_string())
}
