use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateHotelRequestResource {
    #[validate(length(min = 2, max = 120))]
    pub name: Option<String>,

    /// A blank value clears the stored description.
    #[validate(length(max = 4000))]
    pub description: Option<String>,

    /// A blank value clears the stored address.
    #[validate(length(max = 500))]
    pub address: Option<String>,
}
