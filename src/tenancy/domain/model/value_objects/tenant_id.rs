use std::fmt;

use crate::tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError;

/// Identity of a tenant, i.e. of one isolated data partition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TenantId(u64);

impl TenantId {
    pub fn new(value: String) -> Result<Self, TenancyDomainError> {
        let parsed = value
            .trim()
            .parse::<u64>()
            .map_err(|_| TenancyDomainError::InvalidTenantId)?;
        Self::from_u64(parsed)
    }

    pub fn from_u64(value: u64) -> Result<Self, TenancyDomainError> {
        // Stored as BIGINT in the catalog.
        if value == 0 || value > i64::MAX as u64 {
            return Err(TenancyDomainError::InvalidTenantId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
