pub mod config;
pub mod hotel_catalog;
pub mod shared;
pub mod tenancy;
