pub mod hotel_command_service_impl;
