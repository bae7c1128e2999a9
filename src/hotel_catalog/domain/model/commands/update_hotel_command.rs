use crate::{
    hotel_catalog::domain::model::{
        commands::create_hotel_command::{MAX_ADDRESS_CHARS, MAX_DESCRIPTION_CHARS},
        entities::hotel::HotelPatch,
        enums::hotel_domain_error::HotelDomainError,
        value_objects::{
            hotel_id::HotelId, hotel_name::HotelName, optional_text::normalize_optional_text,
        },
    },
    tenancy::domain::model::value_objects::tenant_id::TenantId,
};

#[derive(Clone, Debug)]
pub struct UpdateHotelCommand {
    tenant_id: TenantId,
    hotel_id: HotelId,
    patch: HotelPatch,
}

impl UpdateHotelCommand {
    pub fn new(
        tenant_id: String,
        hotel_id: i64,
        name: Option<String>,
        description: Option<String>,
        address: Option<String>,
    ) -> Result<Self, HotelDomainError> {
        let patch = HotelPatch {
            name: name.map(HotelName::new).transpose()?,
            description: description
                .map(|raw| {
                    normalize_optional_text(Some(raw), MAX_DESCRIPTION_CHARS, || {
                        HotelDomainError::InvalidHotelDescription
                    })
                })
                .transpose()?,
            address: address
                .map(|raw| {
                    normalize_optional_text(Some(raw), MAX_ADDRESS_CHARS, || {
                        HotelDomainError::InvalidHotelAddress
                    })
                })
                .transpose()?,
        };

        if patch.is_empty() {
            return Err(HotelDomainError::EmptyPatch);
        }

        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            hotel_id: HotelId::new(hotel_id)?,
            patch,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }

    pub fn patch(&self) -> &HotelPatch {
        &self.patch
    }
}
