use crate::hotel_catalog::domain::model::enums::hotel_domain_error::HotelDomainError;

/// Trims free text; blank input becomes `None`.
pub fn normalize_optional_text(
    value: Option<String>,
    max_chars: usize,
    error: fn() -> HotelDomainError,
) -> Result<Option<String>, HotelDomainError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max_chars {
        return Err(error());
    }

    Ok(Some(trimmed.to_string()))
}
