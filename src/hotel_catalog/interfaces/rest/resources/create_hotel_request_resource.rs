use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::infrastructure::storage::file_transferer::UploadFile;

/// Multipart form of `POST /api/v1/hotels`. `thumbnails` may repeat; an empty
/// part is kept as a null entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateHotelRequestResource {
    #[validate(length(min = 2, max = 120))]
    pub name: String,

    #[validate(length(max = 4000))]
    pub description: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[serde(default)]
    pub check_duplicate_name: bool,

    #[serde(skip)]
    #[schema(value_type = Vec<String>)]
    pub thumbnails: Vec<Option<UploadFile>>,
}
