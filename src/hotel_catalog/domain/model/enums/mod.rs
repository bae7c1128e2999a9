pub mod hotel_domain_error;
