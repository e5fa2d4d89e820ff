//! Cabin repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use medistay_core::error::{AppError, ErrorKind};
use medistay_core::result::AppResult;
use medistay_core::types::pagination::{PageRequest, PageResponse};
use medistay_core::types::CabinId;
use medistay_entity::cabin::{Cabin, CreateCabin, UpdateCabin};

/// Repository for cabin CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CabinRepository {
    pool: PgPool,
}

impl CabinRepository {
    /// Create a new cabin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a cabin by primary key.
    pub async fn find_by_id(&self, id: CabinId) -> AppResult<Option<Cabin>> {
        sqlx::query_as::<_, Cabin>("SELECT * FROM cabins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find cabin by id", e)
            })
    }

    /// List active cabins with pagination (patient-facing listing).
    pub async fn list_active(&self, page: &PageRequest) -> AppResult<PageResponse<Cabin>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cabins WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count active cabins", e)
            })?;

        let cabins = sqlx::query_as::<_, Cabin>(
            "SELECT * FROM cabins WHERE is_active ORDER BY name LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active cabins", e))?;

        Ok(PageResponse::new(
            cabins,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all cabins including inactive ones (admin listing).
    pub async fn list_all(&self, page: &PageRequest) -> AppResult<PageResponse<Cabin>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cabins")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count cabins", e))?;

        let cabins = sqlx::query_as::<_, Cabin>(
            "SELECT * FROM cabins ORDER BY name LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cabins", e))?;

        Ok(PageResponse::new(
            cabins,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new cabin and return it.
    pub async fn create(&self, data: &CreateCabin) -> AppResult<Cabin> {
        sqlx::query_as::<_, Cabin>(
            r#"
            INSERT INTO cabins (id, name, description, capacity, price_per_night, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)
            RETURNING *
            "#,
        )
        .bind(CabinId::new())
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.capacity)
        .bind(data.price_per_night)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create cabin", e))
    }

    /// Apply a partial update to a cabin and return the updated row.
    pub async fn update(&self, id: CabinId, data: &UpdateCabin) -> AppResult<Option<Cabin>> {
        sqlx::query_as::<_, Cabin>(
            r#"
            UPDATE cabins SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                capacity = COALESCE($4, capacity),
                price_per_night = COALESCE($5, price_per_night),
                is_active = COALESCE($6, is_active),
                updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.capacity)
        .bind(data.price_per_night)
        .bind(data.is_active)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update cabin", e))
    }

    /// Soft-delete a cabin by marking it inactive. Returns `true` if a row
    /// was affected.
    pub async fn deactivate(&self, id: CabinId) -> AppResult<bool> {
        let result = sqlx::query("UPDATE cabins SET is_active = FALSE, updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate cabin", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
