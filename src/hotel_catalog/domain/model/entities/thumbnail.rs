use chrono::{DateTime, Utc};

use crate::hotel_catalog::domain::model::value_objects::hotel_id::HotelId;

/// Row written after an upload completed; never exists without the stored object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Thumbnail {
    id: i64,
    hotel_id: HotelId,
    bucket_name: String,
    file_name: String,
    version_id: String,
    file_size: i64,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewThumbnail {
    pub hotel_id: HotelId,
    pub bucket_name: String,
    pub file_name: String,
    pub version_id: String,
    pub file_size: i64,
}

impl Thumbnail {
    pub fn restore(id: i64, thumbnail: NewThumbnail, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            hotel_id: thumbnail.hotel_id,
            bucket_name: thumbnail.bucket_name,
            file_name: thumbnail.file_name,
            version_id: thumbnail.version_id,
            file_size: thumbnail.file_size,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn hotel_id(&self) -> HotelId {
        self.hotel_id
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    pub fn file_size(&self) -> i64 {
        self.file_size
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
