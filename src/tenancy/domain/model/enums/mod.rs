pub mod tenancy_domain_error;
pub mod tenant_status;
