use crate::hotel_catalog::domain::model::enums::hotel_domain_error::HotelDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct HotelName(String);

impl HotelName {
    pub const MIN_CHARS: usize = 2;
    pub const MAX_CHARS: usize = 120;

    pub fn new(value: String) -> Result<Self, HotelDomainError> {
        let trimmed = value.trim();
        let length = trimmed.chars().count();

        if !(Self::MIN_CHARS..=Self::MAX_CHARS).contains(&length)
            || trimmed.chars().any(char::is_control)
        {
            return Err(HotelDomainError::InvalidHotelName);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a name that was already validated when it was stored.
    pub fn restore(value: String) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
