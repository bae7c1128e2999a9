use crate::{
    hotel_catalog::domain::model::{
        entities::hotel::HotelDraft,
        enums::hotel_domain_error::HotelDomainError,
        value_objects::{hotel_name::HotelName, optional_text::normalize_optional_text},
    },
    shared::infrastructure::storage::file_transferer::UploadFile,
    tenancy::domain::model::value_objects::tenant_id::TenantId,
};

pub const MAX_DESCRIPTION_CHARS: usize = 4_000;
pub const MAX_ADDRESS_CHARS: usize = 500;

#[derive(Clone, Debug)]
pub struct CreateHotelCommand {
    tenant_id: TenantId,
    draft: HotelDraft,
    thumbnails: Vec<Option<UploadFile>>,
    reject_duplicate_name: bool,
}

impl CreateHotelCommand {
    pub fn new(
        tenant_id: String,
        name: String,
        description: Option<String>,
        address: Option<String>,
        thumbnails: Vec<Option<UploadFile>>,
        reject_duplicate_name: bool,
    ) -> Result<Self, HotelDomainError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            draft: HotelDraft {
                name: HotelName::new(name)?,
                description: normalize_optional_text(description, MAX_DESCRIPTION_CHARS, || {
                    HotelDomainError::InvalidHotelDescription
                })?,
                address: normalize_optional_text(address, MAX_ADDRESS_CHARS, || {
                    HotelDomainError::InvalidHotelAddress
                })?,
            },
            thumbnails,
            reject_duplicate_name,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn draft(&self) -> &HotelDraft {
        &self.draft
    }

    pub fn reject_duplicate_name(&self) -> bool {
        self.reject_duplicate_name
    }

    pub fn into_parts(self) -> (TenantId, HotelDraft, Vec<Option<UploadFile>>) {
        (self.tenant_id, self.draft, self.thumbnails)
    }
}
