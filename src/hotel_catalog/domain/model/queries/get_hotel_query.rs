use crate::{
    hotel_catalog::domain::model::{
        enums::hotel_domain_error::HotelDomainError, value_objects::hotel_id::HotelId,
    },
    tenancy::domain::model::value_objects::tenant_id::TenantId,
};

#[derive(Clone, Debug)]
pub struct GetHotelQuery {
    tenant_id: TenantId,
    hotel_id: HotelId,
}

impl GetHotelQuery {
    pub fn new(tenant_id: String, hotel_id: i64) -> Result<Self, HotelDomainError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            hotel_id: HotelId::new(hotel_id)?,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }
}
