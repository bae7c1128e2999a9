use thiserror::Error;

use crate::{
    shared::infrastructure::storage::file_transferer::FileTransferError,
    tenancy::domain::model::enums::tenancy_domain_error::TenancyDomainError,
};

#[derive(Debug, Error)]
pub enum HotelDomainError {
    #[error("hotel id must be a positive integer")]
    InvalidHotelId,

    #[error("hotel name is invalid; use 2..120 printable characters")]
    InvalidHotelName,

    #[error("hotel description is too long")]
    InvalidHotelDescription,

    #[error("hotel address is too long")]
    InvalidHotelAddress,

    #[error("update payload has no fields to change")]
    EmptyPatch,

    #[error("hotel not found")]
    HotelNotFound,

    #[error("a hotel with this name already exists")]
    HotelNameAlreadyExists,

    #[error("thumbnail upload failed: {0}")]
    ThumbnailUploadFailed(#[from] FileTransferError),

    #[error(transparent)]
    Tenancy(#[from] TenancyDomainError),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
