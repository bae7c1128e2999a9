use chrono::{DateTime, Utc};

use crate::hotel_catalog::domain::model::{
    entities::{hotel_grade::HotelGrade, thumbnail::Thumbnail},
    value_objects::{hotel_id::HotelId, hotel_name::HotelName},
};

/// Aggregate root. Owns its thumbnails; grades are a read-only association.
#[derive(Clone, Debug)]
pub struct Hotel {
    id: HotelId,
    name: HotelName,
    description: Option<String>,
    address: Option<String>,
    thumbnails: Vec<Thumbnail>,
    grades: Vec<HotelGrade>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Column values for a hotel that has not been persisted yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HotelDraft {
    pub name: HotelName,
    pub description: Option<String>,
    pub address: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched and `Some(None)` clears it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HotelPatch {
    pub name: Option<HotelName>,
    pub description: Option<Option<String>>,
    pub address: Option<Option<String>>,
}

impl HotelPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.address.is_none()
    }
}

impl Hotel {
    pub fn restore(
        id: HotelId,
        draft: HotelDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            address: draft.address,
            thumbnails: Vec::new(),
            grades: Vec::new(),
            created_at,
            updated_at,
        }
    }

    pub fn with_thumbnails(mut self, thumbnails: Vec<Thumbnail>) -> Self {
        self.thumbnails = thumbnails;
        self
    }

    pub fn with_grades(mut self, grades: Vec<HotelGrade>) -> Self {
        self.grades = grades;
        self
    }

    pub fn id(&self) -> HotelId {
        self.id
    }

    pub fn name(&self) -> &HotelName {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    pub fn grades(&self) -> &[HotelGrade] {
        &self.grades
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
