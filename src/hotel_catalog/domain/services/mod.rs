pub mod hotel_command_service;
pub mod hotel_query_service;
