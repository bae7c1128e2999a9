pub mod get_hotel_query;
pub mod list_hotels_query;
