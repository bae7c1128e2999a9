pub mod hotel_query_service_impl;
