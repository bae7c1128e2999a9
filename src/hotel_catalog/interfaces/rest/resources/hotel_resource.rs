use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    hotel_catalog::domain::model::entities::{
        hotel::Hotel, hotel_grade::HotelGrade, thumbnail::Thumbnail,
    },
    shared::infrastructure::persistence::pagination::PaginatedResult,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ThumbnailResource {
    pub id: i64,
    pub bucket_name: String,
    pub file_name: String,
    pub version_id: String,
    pub file_size: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HotelGradeResource {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HotelResource {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub thumbnails: Vec<ThumbnailResource>,
    pub grades: Vec<HotelGradeResource>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HotelPageResource {
    pub items: Vec<HotelResource>,
    pub page: u32,
    pub per_page: u32,
    pub total_count: i64,
    pub total_pages: u32,
}

impl From<&Thumbnail> for ThumbnailResource {
    fn from(thumbnail: &Thumbnail) -> Self {
        Self {
            id: thumbnail.id(),
            bucket_name: thumbnail.bucket_name().to_string(),
            file_name: thumbnail.file_name().to_string(),
            version_id: thumbnail.version_id().to_string(),
            file_size: thumbnail.file_size(),
            created_at: thumbnail.created_at().to_rfc3339(),
        }
    }
}

impl From<&HotelGrade> for HotelGradeResource {
    fn from(grade: &HotelGrade) -> Self {
        Self {
            id: grade.id,
            name: grade.name.clone(),
        }
    }
}

impl From<Hotel> for HotelResource {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id().value(),
            name: hotel.name().value().to_string(),
            description: hotel.description().map(str::to_string),
            address: hotel.address().map(str::to_string),
            thumbnails: hotel.thumbnails().iter().map(ThumbnailResource::from).collect(),
            grades: hotel.grades().iter().map(HotelGradeResource::from).collect(),
            created_at: hotel.created_at().to_rfc3339(),
            updated_at: hotel.updated_at().to_rfc3339(),
        }
    }
}

impl From<PaginatedResult<Hotel>> for HotelPageResource {
    fn from(page: PaginatedResult<Hotel>) -> Self {
        Self {
            items: page.items.into_iter().map(HotelResource::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total_count: page.total_count,
            total_pages: page.total_pages,
        }
    }
}
