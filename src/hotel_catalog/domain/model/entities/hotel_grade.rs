use crate::hotel_catalog::domain::model::value_objects::hotel_id::HotelId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HotelGrade {
    pub id: i64,
    pub hotel_id: HotelId,
    pub name: String,
}
