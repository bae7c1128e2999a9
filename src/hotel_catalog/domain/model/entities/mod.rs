pub mod hotel;
pub mod hotel_grade;
pub mod thumbnail;
