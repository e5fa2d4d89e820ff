//! Availability period repository implementation.

use sqlx::PgPool;

use medistay_core::error::{AppError, ErrorKind};
use medistay_core::result::AppResult;
use medistay_core::types::{CabinId, PeriodId};
use medistay_entity::availability::{
    AvailabilityPeriod, CreateAvailabilityPeriod, UpdateAvailabilityPeriod,
};

/// Repository for admin-declared cabin availability windows.
#[derive(Debug, Clone)]
pub struct AvailabilityPeriodRepository {
    pool: PgPool,
}

impl AvailabilityPeriodRepository {
    /// Create a new availability period repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a period by primary key.
    pub async fn find_by_id(&self, id: PeriodId) -> AppResult<Option<AvailabilityPeriod>> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            "SELECT * FROM cabin_availability_periods WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find period by id", e))
    }

    /// Load the active windows for a cabin. An empty result means the cabin
    /// is unrestricted.
    pub async fn find_active_for_cabin(
        &self,
        cabin_id: CabinId,
    ) -> AppResult<Vec<AvailabilityPeriod>> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            r#"
            SELECT * FROM cabin_availability_periods
            WHERE cabin_id = $1 AND is_active
            ORDER BY start_date
            "#,
        )
        .bind(cabin_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load availability periods", e)
        })
    }

    /// List all windows for a cabin, active or not (admin view).
    pub async fn list_for_cabin(&self, cabin_id: CabinId) -> AppResult<Vec<AvailabilityPeriod>> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            "SELECT * FROM cabin_availability_periods WHERE cabin_id = $1 ORDER BY start_date",
        )
        .bind(cabin_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list availability periods", e)
        })
    }

    /// Insert a new availability window and return it.
    pub async fn create(&self, data: &CreateAvailabilityPeriod) -> AppResult<AvailabilityPeriod> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            r#"
            INSERT INTO cabin_availability_periods (id, cabin_id, start_date, end_date, is_active, reason, created_at)
            VALUES ($1, $2, $3, $4, TRUE, $5, NOW())
            RETURNING *
            "#,
        )
        .bind(PeriodId::new())
        .bind(data.cabin_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create availability period", e)
        })
    }

    /// Apply a partial update to a window and return the updated row.
    pub async fn update(
        &self,
        id: PeriodId,
        data: &UpdateAvailabilityPeriod,
    ) -> AppResult<Option<AvailabilityPeriod>> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            r#"
            UPDATE cabin_availability_periods SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                is_active = COALESCE($4, is_active),
                reason = COALESCE($5, reason)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.is_active)
        .bind(&data.reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update availability period", e)
        })
    }

    /// Delete a window. Returns `true` if a row was deleted.
    pub async fn delete(&self, id: PeriodId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cabin_availability_periods WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete availability period", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
