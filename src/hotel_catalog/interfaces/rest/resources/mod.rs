pub mod create_hotel_request_resource;
pub mod hotel_error_response_resource;
pub mod hotel_resource;
pub mod list_hotels_query_resource;
pub mod update_hotel_request_resource;
