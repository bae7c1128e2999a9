pub mod hotel_rest_controller;
