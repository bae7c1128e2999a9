#[path = "support/fakes.rs"]
mod fakes;
#[path = "support/fixtures.rs"]
mod fixtures;

pub use fixtures::{
    MULTIPART_BOUNDARY, TENANT_A, TENANT_B, UNKNOWN_TENANT, create_command, multipart_body,
    thumbnail,
};
pub use harness::{HotelCatalogTestHarness, create_harness};
