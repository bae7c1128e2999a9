use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::hotel_catalog::{
    domain::model::{
        entities::thumbnail::{NewThumbnail, Thumbnail},
        enums::hotel_domain_error::HotelDomainError,
        value_objects::hotel_id::HotelId,
    },
    infrastructure::persistence::repositories::thumbnail_row_repository::ThumbnailRowRepository,
};

pub struct SqlxThumbnailRowRepositoryImpl {
    pool: PgPool,
}

impl SqlxThumbnailRowRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: PgRow) -> Result<Thumbnail, HotelDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let hotel_id: i64 = row.try_get("hotel_id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        Ok(Thumbnail::restore(
            id,
            NewThumbnail {
                hotel_id: HotelId::new(hotel_id)?,
                bucket_name: row.try_get("bucket_name").map_err(map_infra_error)?,
                file_name: row.try_get("file_name").map_err(map_infra_error)?,
                version_id: row.try_get("version_id").map_err(map_infra_error)?,
                file_size: row.try_get("file_size").map_err(map_infra_error)?,
            },
            created_at,
        ))
    }
}

#[async_trait]
impl ThumbnailRowRepository for SqlxThumbnailRowRepositoryImpl {
    async fn insert(&self, thumbnail: &NewThumbnail) -> Result<Thumbnail, HotelDomainError> {
        let statement = r#"
            INSERT INTO thumbnails (hotel_id, bucket_name, file_name, version_id, file_size)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, hotel_id, bucket_name, file_name, version_id, file_size, created_at
        "#;

        let row = sqlx::query(statement)
            .bind(thumbnail.hotel_id.value())
            .bind(&thumbnail.bucket_name)
            .bind(&thumbnail.file_name)
            .bind(&thumbnail.version_id)
            .bind(thumbnail.file_size)
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Self::row_to_entity(row)
    }

    async fn list_by_hotel(&self, hotel_id: HotelId) -> Result<Vec<Thumbnail>, HotelDomainError> {
        let statement = r#"
            SELECT id, hotel_id, bucket_name, file_name, version_id, file_size, created_at
            FROM thumbnails
            WHERE hotel_id = $1
            ORDER BY id
        "#;

        let rows = sqlx::query(statement)
            .bind(hotel_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> HotelDomainError {
    HotelDomainError::InfrastructureError(error.to_string())
}
