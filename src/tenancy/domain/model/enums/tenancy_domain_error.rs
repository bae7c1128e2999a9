use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenancyDomainError {
    #[error("tenant id must be a positive integer")]
    InvalidTenantId,

    #[error("tenant not found")]
    TenantNotFound,

    #[error("tenant is not active")]
    TenantInactive,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
