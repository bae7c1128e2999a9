pub mod hotel_id;
pub mod hotel_name;
pub mod optional_text;
