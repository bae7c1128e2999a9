use bytes::Bytes;
use hotel_reservation_api::{
    hotel_catalog::domain::model::commands::create_hotel_command::CreateHotelCommand,
    shared::infrastructure::storage::file_transferer::UploadFile,
};

pub const TENANT_A: u64 = 11;
pub const TENANT_B: u64 = 22;
pub const UNKNOWN_TENANT: u64 = 99;

pub const HOTELS_BUCKET: &str = "hotels";
pub const THUMBNAILS_PATH: &str = "thumbnails";

pub const MULTIPART_BOUNDARY: &str = "hotel-boundary";

pub fn thumbnail(file_name: &str) -> UploadFile {
    UploadFile::new(
        file_name.to_string(),
        Some("image/png".to_string()),
        Bytes::from(format!("png bytes of {file_name}")),
    )
}

pub fn create_command(
    tenant_id: u64,
    name: &str,
    thumbnails: Vec<Option<UploadFile>>,
    reject_duplicate_name: bool,
) -> CreateHotelCommand {
    CreateHotelCommand::new(
        tenant_id.to_string(),
        name.to_string(),
        Some("Sea view".to_string()),
        Some("1 Harbour Road".to_string()),
        thumbnails,
        reject_duplicate_name,
    )
    .expect("valid create command")
}

/// Builds a `multipart/form-data` body; `files` are `(file name, content)` parts
/// named `thumbnails`.
pub fn multipart_body(text_fields: &[(&str, &str)], files: &[(&str, &str)]) -> String {
    let mut body = String::new();

    for (name, value) in text_fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    for (file_name, content) in files {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"thumbnails\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));

    body
}
