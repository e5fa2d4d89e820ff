//! The booking writer and patient/admin booking operations.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use medistay_core::error::AppError;
use medistay_core::result::AppResult;
use medistay_core::traits::Clock;
use medistay_core::types::pagination::{PageRequest, PageResponse};
use medistay_core::types::{BookingId, CabinId, StayRange};
use medistay_database::repositories::{BookingRepository, CabinRepository};
use medistay_entity::booking::{number, BookingStatus, CabinBooking, NewBooking, PaymentStatus};
use medistay_entity::cabin::Cabin;

use crate::availability::AvailabilityService;
use crate::booking::lifecycle;
use crate::context::RequestContext;

/// A patient's request to book a cabin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The cabin to book.
    pub cabin_id: CabinId,
    /// First occupied day.
    pub check_in_date: NaiveDate,
    /// Vacate day.
    pub check_out_date: NaiveDate,
    /// Number of guests staying.
    pub number_of_guests: i32,
    /// Contact name for the stay.
    pub guest_name: String,
    /// Contact phone number.
    pub guest_phone: Option<String>,
    /// Contact email address.
    pub guest_email: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Validate the requested dates: not in the past, and at least one night.
///
/// Date-only comparison; time-of-day on the caller's side is ignored.
fn validate_dates(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
) -> AppResult<StayRange> {
    if check_in < today {
        return Err(AppError::validation("Check-in date cannot be in the past"));
    }
    StayRange::new(check_in, check_out)
}

/// Build the insert payload: capacity and contact validation, price
/// computation, and reference generation.
fn build_new_booking(
    cabin: &Cabin,
    stay: &StayRange,
    req: &CreateBookingRequest,
    ctx: &RequestContext,
    now: DateTime<Utc>,
) -> AppResult<NewBooking> {
    if req.number_of_guests < 1 {
        return Err(AppError::validation("At least one guest is required"));
    }
    if req.number_of_guests > cabin.capacity {
        return Err(AppError::validation(format!(
            "Number of guests exceeds the cabin capacity of {}",
            cabin.capacity
        )));
    }
    if req.guest_name.trim().is_empty() {
        return Err(AppError::validation("Guest name is required"));
    }

    let nights = stay.nights();
    let total_amount = cabin.price_per_night.checked_mul(nights)?;

    Ok(NewBooking {
        booking_number: number::generate(now),
        cabin_id: cabin.id,
        patient_id: ctx.patient_id(),
        check_in_date: stay.check_in(),
        check_out_date: stay.check_out(),
        number_of_nights: nights as i32,
        number_of_guests: req.number_of_guests,
        total_amount,
        guest_name: req.guest_name.trim().to_string(),
        guest_phone: req.guest_phone.clone(),
        guest_email: req.guest_email.clone(),
        notes: req.notes.clone(),
    })
}

/// Handles booking creation, retrieval, cancellation, and admin lifecycle
/// progression.
#[derive(Clone)]
pub struct BookingService {
    /// Cabin repository.
    cabin_repo: Arc<CabinRepository>,
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Availability checker.
    availability: Arc<AvailabilityService>,
    /// Injected time source.
    clock: Arc<dyn Clock>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        cabin_repo: Arc<CabinRepository>,
        booking_repo: Arc<BookingRepository>,
        availability: Arc<AvailabilityService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cabin_repo,
            booking_repo,
            availability,
            clock,
        }
    }

    /// Create a booking for the calling patient.
    ///
    /// Validation order: past check-in, date order, availability, cabin
    /// state, capacity. The first violated rule is returned. The insert
    /// itself re-checks conflicts transactionally, so passing the
    /// availability check here does not guarantee the insert wins a race.
    pub async fn create_booking(
        &self,
        ctx: &RequestContext,
        req: CreateBookingRequest,
    ) -> AppResult<CabinBooking> {
        let stay = validate_dates(req.check_in_date, req.check_out_date, self.clock.today())?;

        let availability = self
            .availability
            .check_availability(req.cabin_id, req.check_in_date, req.check_out_date)
            .await?;
        if !availability.available {
            let reason = availability
                .reason
                .unwrap_or_else(|| "Cabin is not available for the requested dates".to_string());
            return Err(AppError::unavailable(reason));
        }

        let cabin = self
            .cabin_repo
            .find_by_id(req.cabin_id)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| AppError::not_found("Cabin not found"))?;

        let new_booking = build_new_booking(&cabin, &stay, &req, ctx, self.clock.now())?;
        let booking = self.booking_repo.create_checked(&new_booking).await?;

        info!(
            booking_number = %booking.booking_number,
            cabin_id = %booking.cabin_id,
            patient_id = %booking.patient_id,
            nights = booking.number_of_nights,
            "Booking created"
        );

        Ok(booking)
    }

    /// Fetch a booking, enforcing ownership for non-admin callers.
    ///
    /// A patient asking for someone else's booking gets NotFound rather than
    /// Forbidden so existence is not leaked.
    pub async fn get_booking(
        &self,
        ctx: &RequestContext,
        id: BookingId,
    ) -> AppResult<CabinBooking> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        if !ctx.is_admin() && !booking.is_owned_by(ctx.patient_id()) {
            return Err(AppError::not_found("Booking not found"));
        }

        Ok(booking)
    }

    /// List the calling patient's bookings, newest first.
    pub async fn list_my_bookings(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CabinBooking>> {
        self.booking_repo
            .list_for_patient(ctx.patient_id(), page)
            .await
    }

    /// List all bookings, optionally filtered by status (admin).
    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CabinBooking>> {
        self.booking_repo.list_all(status, page).await
    }

    /// Cancel a booking. Admins may cancel any booking; patients only their
    /// own. Terminal bookings cannot be cancelled.
    pub async fn cancel_booking(
        &self,
        ctx: &RequestContext,
        id: BookingId,
    ) -> AppResult<CabinBooking> {
        let mut booking = self.get_booking(ctx, id).await?;

        lifecycle::apply_transition(&mut booking, BookingStatus::Cancelled, self.clock.now())?;
        let booking = self.booking_repo.update(&booking).await?;

        info!(booking_number = %booking.booking_number, "Booking cancelled");
        Ok(booking)
    }

    /// Admin: confirm a PENDING booking, holding its dates.
    pub async fn confirm_booking(&self, id: BookingId) -> AppResult<CabinBooking> {
        self.transition(id, BookingStatus::Confirmed).await
    }

    /// Admin: check the patient in.
    pub async fn check_in_booking(&self, id: BookingId) -> AppResult<CabinBooking> {
        self.transition(id, BookingStatus::CheckedIn).await
    }

    /// Admin: check the patient out. The booking becomes terminal.
    pub async fn check_out_booking(&self, id: BookingId) -> AppResult<CabinBooking> {
        self.transition(id, BookingStatus::CheckedOut).await
    }

    /// Admin: record a payment state change. Permitted in any lifecycle
    /// state, including after checkout.
    pub async fn set_payment_status(
        &self,
        id: BookingId,
        payment_status: PaymentStatus,
    ) -> AppResult<CabinBooking> {
        let mut booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        booking.payment_status = payment_status;
        let booking = self.booking_repo.update(&booking).await?;

        info!(
            booking_number = %booking.booking_number,
            payment_status = %booking.payment_status,
            "Payment status updated"
        );
        Ok(booking)
    }

    async fn transition(&self, id: BookingId, next: BookingStatus) -> AppResult<CabinBooking> {
        let mut booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        lifecycle::apply_transition(&mut booking, next, self.clock.now())?;
        let booking = self.booking_repo.update(&booking).await?;

        info!(
            booking_number = %booking.booking_number,
            status = %booking.status,
            "Booking status updated"
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use medistay_core::types::Money;
    use medistay_entity::user::UserRole;
    use uuid::Uuid;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).expect("valid date")
    }

    fn cabin(capacity: i32, nightly_major: i64) -> Cabin {
        Cabin {
            id: CabinId::new(),
            name: "Cabin C101".to_string(),
            description: None,
            capacity,
            price_per_night: Money::from_major(nightly_major),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(cabin_id: CabinId, guests: i32) -> CreateBookingRequest {
        CreateBookingRequest {
            cabin_id,
            check_in_date: d(6, 1),
            check_out_date: d(6, 4),
            number_of_guests: guests,
            guest_name: "Jordan Blake".to_string(),
            guest_phone: Some("+1-555-0100".to_string()),
            guest_email: Some("jordan@example.com".to_string()),
            notes: None,
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), UserRole::Patient)
    }

    #[test]
    fn test_past_check_in_rejected() {
        // Date-only comparison: any check-in before today fails.
        let err = validate_dates(d(5, 31), d(6, 4), d(6, 1)).expect_err("past date");
        assert_eq!(err.kind, medistay_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_same_day_check_in_allowed() {
        assert!(validate_dates(d(6, 1), d(6, 4), d(6, 1)).is_ok());
    }

    #[test]
    fn test_inverted_dates_rejected() {
        assert!(validate_dates(d(6, 4), d(6, 1), d(6, 1)).is_err());
    }

    #[test]
    fn test_three_night_stay_pricing() {
        // Capacity 2, $100/night, 06-01 → 06-04: 3 nights, $300 total.
        let c = cabin(2, 100);
        let stay = StayRange::new(d(6, 1), d(6, 4)).expect("valid");
        let new_booking =
            build_new_booking(&c, &stay, &request(c.id, 2), &ctx(), Utc::now()).expect("valid");
        assert_eq!(new_booking.number_of_nights, 3);
        assert_eq!(new_booking.total_amount, Money::from_major(300));
    }

    #[test]
    fn test_capacity_exceeded_names_the_limit() {
        let c = cabin(2, 100);
        let stay = StayRange::new(d(6, 1), d(6, 4)).expect("valid");
        let err = build_new_booking(&c, &stay, &request(c.id, 3), &ctx(), Utc::now())
            .expect_err("over capacity");
        assert_eq!(err.kind, medistay_core::error::ErrorKind::Validation);
        assert!(err.message.contains('2'), "message names the capacity");
    }

    #[test]
    fn test_zero_guests_rejected() {
        let c = cabin(2, 100);
        let stay = StayRange::new(d(6, 1), d(6, 4)).expect("valid");
        assert!(build_new_booking(&c, &stay, &request(c.id, 0), &ctx(), Utc::now()).is_err());
    }

    #[test]
    fn test_blank_guest_name_rejected() {
        let c = cabin(2, 100);
        let stay = StayRange::new(d(6, 1), d(6, 4)).expect("valid");
        let mut req = request(c.id, 2);
        req.guest_name = "   ".to_string();
        assert!(build_new_booking(&c, &stay, &req, &ctx(), Utc::now()).is_err());
    }

    #[test]
    fn test_new_booking_carries_reference_and_owner() {
        let c = cabin(4, 150);
        let stay = StayRange::new(d(6, 1), d(6, 2)).expect("valid");
        let caller = ctx();
        let new_booking =
            build_new_booking(&c, &stay, &request(c.id, 1), &caller, Utc::now()).expect("valid");
        assert!(new_booking.booking_number.starts_with("CB-"));
        assert_eq!(new_booking.patient_id, caller.patient_id());
        assert_eq!(new_booking.total_amount, Money::from_major(150));
    }
}
