use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    hotel_catalog::{
        domain::model::{
            entities::{
                hotel::{Hotel, HotelDraft, HotelPatch},
                hotel_grade::HotelGrade,
            },
            enums::hotel_domain_error::HotelDomainError,
            value_objects::{hotel_id::HotelId, hotel_name::HotelName},
        },
        infrastructure::persistence::repositories::hotel_row_repository::HotelRowRepository,
    },
    shared::infrastructure::persistence::pagination::{
        PaginatedResult, PaginatedSource, PaginationFilter, paginated_list,
    },
};

const HOTEL_COLUMNS: &str = "id, name, description, address, created_at, updated_at";

const HOTELS_SOURCE: PaginatedSource<'static> = PaginatedSource {
    table: "hotels",
    columns: HOTEL_COLUMNS,
    sortable_columns: &["id", "name", "created_at", "updated_at"],
    default_order_by: "id",
};

fn hotel_from_columns(
    id: i64,
    name: String,
    description: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Result<Hotel, HotelDomainError> {
    Ok(Hotel::restore(
        HotelId::new(id)?,
        HotelDraft {
            name: HotelName::restore(name),
            description,
            address,
        },
        created_at,
        updated_at,
    ))
}

pub struct SqlxHotelRowRepositoryImpl {
    pool: PgPool,
}

impl SqlxHotelRowRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: PgRow) -> Result<Hotel, HotelDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let name: String = row.try_get("name").map_err(map_infra_error)?;
        let description: Option<String> = row.try_get("description").map_err(map_infra_error)?;
        let address: Option<String> = row.try_get("address").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_infra_error)?;

        hotel_from_columns(id, name, description, address, created_at, updated_at)
    }

    async fn load_grades(
        &self,
        hotel_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<HotelGrade>>, HotelDomainError> {
        if hotel_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let statement = r#"
            SELECT id, hotel_id, name
            FROM hotel_grades
            WHERE hotel_id = ANY($1)
            ORDER BY id
        "#;

        let rows = sqlx::query(statement)
            .bind(hotel_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let mut grades: HashMap<i64, Vec<HotelGrade>> = HashMap::new();
        for row in rows {
            let hotel_id: i64 = row.try_get("hotel_id").map_err(map_infra_error)?;
            grades.entry(hotel_id).or_default().push(HotelGrade {
                id: row.try_get("id").map_err(map_infra_error)?,
                hotel_id: HotelId::new(hotel_id)?,
                name: row.try_get("name").map_err(map_infra_error)?,
            });
        }

        Ok(grades)
    }
}

#[async_trait]
impl HotelRowRepository for SqlxHotelRowRepositoryImpl {
    async fn insert(&self, draft: &HotelDraft) -> Result<Hotel, HotelDomainError> {
        let statement = r#"
            INSERT INTO hotels (name, description, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, address, created_at, updated_at
        "#;

        let row = sqlx::query(statement)
            .bind(draft.name.value())
            .bind(draft.description.as_deref())
            .bind(draft.address.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Self::row_to_entity(row)
    }

    async fn update(
        &self,
        hotel_id: HotelId,
        patch: &HotelPatch,
    ) -> Result<Option<Hotel>, HotelDomainError> {
        let statement = r#"
            UPDATE hotels
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                address = CASE WHEN $5 THEN $6 ELSE address END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, address, created_at, updated_at
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(hotel_id.value())
            .bind(patch.name.as_ref().map(HotelName::value))
            .bind(patch.description.is_some())
            .bind(patch.description.as_ref().and_then(|value| value.as_deref()))
            .bind(patch.address.is_some())
            .bind(patch.address.as_ref().and_then(|value| value.as_deref()))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> Result<Option<Hotel>, HotelDomainError> {
        let statement = r#"
            SELECT id, name, description, address, created_at, updated_at
            FROM hotels
            WHERE id = $1
        "#;

        let Some(row) = sqlx::query(statement)
            .bind(hotel_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?
        else {
            return Ok(None);
        };

        let hotel = Self::row_to_entity(row)?;
        let mut grades = self.load_grades(&[hotel_id.value()]).await?;
        let hotel_grades = grades.remove(&hotel_id.value()).unwrap_or_default();

        Ok(Some(hotel.with_grades(hotel_grades)))
    }

    async fn delete(&self, hotel_id: HotelId) -> Result<bool, HotelDomainError> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(hotel_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn paginate(
        &self,
        filter: &PaginationFilter,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError> {
        let page = paginated_list(&self.pool, &HOTELS_SOURCE, filter)
            .await
            .map_err(map_infra_error)?
            .try_map(Self::row_to_entity)?;

        let hotel_ids: Vec<i64> = page.items.iter().map(|hotel| hotel.id().value()).collect();
        let mut grades = self.load_grades(&hotel_ids).await?;

        Ok(page.map(|hotel| {
            let hotel_grades = grades.remove(&hotel.id().value()).unwrap_or_default();
            hotel.with_grades(hotel_grades)
        }))
    }

    async fn count_by_name(&self, name: &HotelName) -> Result<i64, HotelDomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM hotels WHERE name = $1")
            .bind(name.value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)
    }
}

fn map_infra_error(error: sqlx::Error) -> HotelDomainError {
    HotelDomainError::InfrastructureError(error.to_string())
}
