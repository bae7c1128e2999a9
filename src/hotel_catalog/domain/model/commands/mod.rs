pub mod create_hotel_command;
pub mod delete_hotel_command;
pub mod update_hotel_command;
