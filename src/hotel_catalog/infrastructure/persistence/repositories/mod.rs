pub mod hotel_catalog_connection;
pub mod hotel_repository;
pub mod hotel_row_repository;
pub mod postgres;
pub mod tenant_hotel_repository_impl;
pub mod thumbnail_row_repository;
