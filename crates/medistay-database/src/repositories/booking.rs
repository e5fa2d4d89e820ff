//! Cabin booking repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use medistay_core::error::{AppError, ErrorKind};
use medistay_core::result::AppResult;
use medistay_core::types::pagination::{PageRequest, PageResponse};
use medistay_core::types::{BookingId, CabinId, PatientId};
use medistay_entity::booking::{BookingStatus, CabinBooking, NewBooking};

/// Repository for booking persistence and queries.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: BookingId) -> AppResult<Option<CabinBooking>> {
        sqlx::query_as::<_, CabinBooking>("SELECT * FROM cabin_bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// Find a booking by its human-readable reference.
    pub async fn find_by_number(&self, booking_number: &str) -> AppResult<Option<CabinBooking>> {
        sqlx::query_as::<_, CabinBooking>("SELECT * FROM cabin_bookings WHERE booking_number = $1")
            .bind(booking_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by number", e)
            })
    }

    /// List a patient's bookings, newest first.
    pub async fn list_for_patient(
        &self,
        patient_id: PatientId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CabinBooking>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cabin_bookings WHERE patient_id = $1")
                .bind(patient_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count patient bookings", e)
                })?;

        let bookings = sqlx::query_as::<_, CabinBooking>(
            r#"
            SELECT * FROM cabin_bookings
            WHERE patient_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(patient_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list patient bookings", e)
        })?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all bookings, optionally filtered by status (admin view).
    pub async fn list_all(
        &self,
        status: Option<BookingStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CabinBooking>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM cabin_bookings WHERE ($1::booking_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))?;

        let bookings = sqlx::query_as::<_, CabinBooking>(
            r#"
            SELECT * FROM cabin_bookings
            WHERE ($1::booking_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Load the bookings that hold dates against new requests for a cabin:
    /// status CONFIRMED or CHECKED_IN. PENDING bookings do not block.
    pub async fn find_blocking_for_cabin(
        &self,
        cabin_id: CabinId,
    ) -> AppResult<Vec<CabinBooking>> {
        sqlx::query_as::<_, CabinBooking>(
            r#"
            SELECT * FROM cabin_bookings
            WHERE cabin_id = $1 AND status IN ('confirmed', 'checked_in')
            ORDER BY check_in_date
            "#,
        )
        .bind(cabin_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load blocking bookings", e)
        })
    }

    /// Whether any CONFIRMED or CHECKED_IN booking references the cabin.
    /// Used to refuse cabin deactivation while stays are held.
    pub async fn has_blocking_for_cabin(&self, cabin_id: CabinId) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM cabin_bookings
            WHERE cabin_id = $1 AND status IN ('confirmed', 'checked_in')
            "#,
        )
        .bind(cabin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count blocking bookings", e)
        })?;

        Ok(count > 0)
    }

    /// Insert a new booking, re-checking date conflicts inside the same
    /// transaction.
    ///
    /// The pre-flight availability check and the insert are not atomic on
    /// their own, so this method takes a per-cabin advisory lock and recounts
    /// overlapping CONFIRMED/CHECKED_IN stays before inserting. Two
    /// concurrent requests for overlapping dates therefore serialize here,
    /// and the loser gets a conflict instead of a double-booking.
    pub async fn create_checked(&self, data: &NewBooking) -> AppResult<CabinBooking> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
            .bind(data.cabin_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock cabin for booking", e)
            })?;

        // Half-open overlap: existing.check_in < new.check_out AND
        // existing.check_out > new.check_in.
        let conflicts: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM cabin_bookings
            WHERE cabin_id = $1
              AND status IN ('confirmed', 'checked_in')
              AND check_in_date < $2
              AND check_out_date > $3
            "#,
        )
        .bind(data.cabin_id)
        .bind(data.check_out_date)
        .bind(data.check_in_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to re-check booking conflicts", e)
        })?;

        if conflicts > 0 {
            return Err(AppError::unavailable(
                "The requested dates conflict with an existing booking",
            ));
        }

        let booking = sqlx::query_as::<_, CabinBooking>(
            r#"
            INSERT INTO cabin_bookings (
                id, booking_number, cabin_id, patient_id,
                check_in_date, check_out_date, number_of_nights, number_of_guests,
                total_amount, status, payment_status,
                guest_name, guest_phone, guest_email, notes,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending', 'pending', $10, $11, $12, $13, $14, $14)
            RETURNING *
            "#,
        )
        .bind(BookingId::new())
        .bind(&data.booking_number)
        .bind(data.cabin_id)
        .bind(data.patient_id)
        .bind(data.check_in_date)
        .bind(data.check_out_date)
        .bind(data.number_of_nights)
        .bind(data.number_of_guests)
        .bind(data.total_amount)
        .bind(&data.guest_name)
        .bind(&data.guest_phone)
        .bind(&data.guest_email)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        Ok(booking)
    }

    /// Persist lifecycle mutations: status, payment status, timestamps, and
    /// notes. Returns the updated row.
    pub async fn update(&self, booking: &CabinBooking) -> AppResult<CabinBooking> {
        sqlx::query_as::<_, CabinBooking>(
            r#"
            UPDATE cabin_bookings SET
                status = $2,
                payment_status = $3,
                notes = $4,
                confirmed_at = $5,
                checked_in_at = $6,
                checked_out_at = $7,
                cancelled_at = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.status)
        .bind(booking.payment_status)
        .bind(&booking.notes)
        .bind(booking.confirmed_at)
        .bind(booking.checked_in_at)
        .bind(booking.checked_out_at)
        .bind(booking.cancelled_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))
    }
}

/// Map insert failures, surfacing a unique-violation on the booking number
/// as a retryable conflict rather than a generic database error.
fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AppError::conflict("Booking reference collision, please retry");
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to insert booking", err)
}
