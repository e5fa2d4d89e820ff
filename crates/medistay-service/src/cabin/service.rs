//! Cabin catalogue and availability-window administration.

use std::sync::Arc;

use tracing::info;

use medistay_core::error::AppError;
use medistay_core::result::AppResult;
use medistay_core::types::pagination::{PageRequest, PageResponse};
use medistay_core::types::{CabinId, PeriodId};
use medistay_database::repositories::{
    AvailabilityPeriodRepository, BookingRepository, CabinRepository,
};
use medistay_entity::availability::{
    AvailabilityPeriod, CreateAvailabilityPeriod, UpdateAvailabilityPeriod,
};
use medistay_entity::cabin::{Cabin, CreateCabin, UpdateCabin};

/// Handles the cabin catalogue and admin-declared availability windows.
#[derive(Debug, Clone)]
pub struct CabinService {
    /// Cabin repository.
    cabin_repo: Arc<CabinRepository>,
    /// Availability period repository.
    period_repo: Arc<AvailabilityPeriodRepository>,
    /// Booking repository, used to guard deactivation.
    booking_repo: Arc<BookingRepository>,
}

impl CabinService {
    /// Creates a new cabin service.
    pub fn new(
        cabin_repo: Arc<CabinRepository>,
        period_repo: Arc<AvailabilityPeriodRepository>,
        booking_repo: Arc<BookingRepository>,
    ) -> Self {
        Self {
            cabin_repo,
            period_repo,
            booking_repo,
        }
    }

    /// List active cabins (patient-facing).
    pub async fn list_active(&self, page: &PageRequest) -> AppResult<PageResponse<Cabin>> {
        self.cabin_repo.list_active(page).await
    }

    /// List all cabins including inactive ones (admin).
    pub async fn list_all(&self, page: &PageRequest) -> AppResult<PageResponse<Cabin>> {
        self.cabin_repo.list_all(page).await
    }

    /// Fetch a cabin by ID.
    pub async fn get_cabin(&self, id: CabinId) -> AppResult<Cabin> {
        self.cabin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Cabin not found"))
    }

    /// Admin: create a cabin.
    pub async fn create_cabin(&self, data: CreateCabin) -> AppResult<Cabin> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Cabin name is required"));
        }
        if data.capacity < 1 {
            return Err(AppError::validation("Cabin capacity must be at least 1"));
        }
        if data.price_per_night.is_negative() {
            return Err(AppError::validation("Nightly price cannot be negative"));
        }

        let cabin = self.cabin_repo.create(&data).await?;
        info!(cabin_id = %cabin.id, name = %cabin.name, "Cabin created");
        Ok(cabin)
    }

    /// Admin: partially update a cabin.
    pub async fn update_cabin(&self, id: CabinId, data: UpdateCabin) -> AppResult<Cabin> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Cabin name cannot be empty"));
            }
        }
        if let Some(capacity) = data.capacity {
            if capacity < 1 {
                return Err(AppError::validation("Cabin capacity must be at least 1"));
            }
        }
        if let Some(price) = data.price_per_night {
            if price.is_negative() {
                return Err(AppError::validation("Nightly price cannot be negative"));
            }
        }

        let cabin = self
            .cabin_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Cabin not found"))?;
        info!(cabin_id = %cabin.id, "Cabin updated");
        Ok(cabin)
    }

    /// Admin: soft-delete a cabin. Refused while CONFIRMED or CHECKED_IN
    /// bookings reference it.
    pub async fn deactivate_cabin(&self, id: CabinId) -> AppResult<()> {
        if self.booking_repo.has_blocking_for_cabin(id).await? {
            return Err(AppError::conflict(
                "Cabin has active bookings and cannot be deactivated",
            ));
        }

        if !self.cabin_repo.deactivate(id).await? {
            return Err(AppError::not_found("Cabin not found"));
        }
        info!(cabin_id = %id, "Cabin deactivated");
        Ok(())
    }

    /// Admin: list all availability windows for a cabin.
    pub async fn list_periods(&self, cabin_id: CabinId) -> AppResult<Vec<AvailabilityPeriod>> {
        // Surface a missing cabin rather than an empty list.
        self.get_cabin(cabin_id).await?;
        self.period_repo.list_for_cabin(cabin_id).await
    }

    /// Admin: declare a new availability window.
    pub async fn create_period(
        &self,
        data: CreateAvailabilityPeriod,
    ) -> AppResult<AvailabilityPeriod> {
        if data.start_date >= data.end_date {
            return Err(AppError::validation(
                "Availability period end date must be after its start date",
            ));
        }
        self.get_cabin(data.cabin_id).await?;

        let period = self.period_repo.create(&data).await?;
        info!(
            period_id = %period.id,
            cabin_id = %period.cabin_id,
            start = %period.start_date,
            end = %period.end_date,
            "Availability period created"
        );
        Ok(period)
    }

    /// Admin: partially update an availability window.
    pub async fn update_period(
        &self,
        id: PeriodId,
        data: UpdateAvailabilityPeriod,
    ) -> AppResult<AvailabilityPeriod> {
        let existing = self
            .period_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Availability period not found"))?;

        let start = data.start_date.unwrap_or(existing.start_date);
        let end = data.end_date.unwrap_or(existing.end_date);
        if start >= end {
            return Err(AppError::validation(
                "Availability period end date must be after its start date",
            ));
        }

        let period = self
            .period_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Availability period not found"))?;
        info!(period_id = %period.id, "Availability period updated");
        Ok(period)
    }

    /// Admin: delete an availability window.
    pub async fn delete_period(&self, id: PeriodId) -> AppResult<()> {
        if !self.period_repo.delete(id).await? {
            return Err(AppError::not_found("Availability period not found"));
        }
        info!(period_id = %id, "Availability period deleted");
        Ok(())
    }
}
