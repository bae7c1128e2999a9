use crate::{
    hotel_catalog::domain::model::enums::hotel_domain_error::HotelDomainError,
    shared::infrastructure::persistence::pagination::PaginationFilter,
    tenancy::domain::model::value_objects::tenant_id::TenantId,
};

#[derive(Clone, Debug)]
pub struct ListHotelsQuery {
    tenant_id: TenantId,
    filter: PaginationFilter,
}

impl ListHotelsQuery {
    pub fn new(tenant_id: String, filter: PaginationFilter) -> Result<Self, HotelDomainError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            filter,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn filter(&self) -> &PaginationFilter {
        &self.filter
    }
}
