pub mod sqlx_hotel_row_repository_impl;
pub mod sqlx_thumbnail_row_repository_impl;
