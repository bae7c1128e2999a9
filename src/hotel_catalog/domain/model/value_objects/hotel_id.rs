use std::fmt;

use crate::hotel_catalog::domain::model::enums::hotel_domain_error::HotelDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct HotelId(i64);

impl HotelId {
    pub fn new(value: i64) -> Result<Self, HotelDomainError> {
        if value <= 0 {
            return Err(HotelDomainError::InvalidHotelId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
