use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct ListHotelsQueryResource {
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,

    #[validate(regex(path = "*ORDER_BY_REGEX"))]
    pub order_by: Option<String>,

    #[validate(regex(path = "*ORDER_DIR_REGEX"))]
    pub order_dir: Option<String>,
}

impl ListHotelsQueryResource {
    pub fn order_desc(&self) -> bool {
        self.order_dir
            .as_deref()
            .is_some_and(|direction| direction.eq_ignore_ascii_case("desc"))
    }
}

lazy_static::lazy_static! {
    pub static ref ORDER_BY_REGEX: regex::Regex = regex::Regex::new("^(id|name|created_at|updated_at)$").expect("valid regex");
    pub static ref ORDER_DIR_REGEX: regex::Regex = regex::Regex::new("(?i)^(asc|desc)$").expect("valid regex");
}
