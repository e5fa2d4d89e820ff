//! The availability checker.
//!
//! Decides whether a cabin is free for a requested date range by combining
//! admin-declared availability windows with existing date-holding bookings.
//! The decision itself is a pure function over already-loaded rows; the
//! service wrapper performs the reads.
//!
//! "Unavailable" is a business outcome carried in [`Availability`]; a failed
//! database read surfaces as an error and is never conflated with it.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medistay_core::result::AppResult;
use medistay_core::types::{CabinId, StayRange};
use medistay_database::repositories::{
    AvailabilityPeriodRepository, BookingRepository, CabinRepository,
};
use medistay_entity::availability::AvailabilityPeriod;
use medistay_entity::booking::CabinBooking;
use medistay_entity::cabin::Cabin;

/// Reason shown when the requested range is empty or inverted.
pub const REASON_INVALID_RANGE: &str = "Check-out date must be after check-in date";
/// Reason shown when the cabin does not exist or is inactive.
pub const REASON_CABIN_UNAVAILABLE: &str = "Cabin not found or inactive";
/// Reason shown when the stay does not fit inside any availability window.
pub const REASON_OUTSIDE_WINDOW: &str =
    "Requested dates fall outside the cabin's availability windows";
/// Reason shown when the stay overlaps an existing booking.
pub const REASON_DATE_CONFLICT: &str = "The requested dates conflict with an existing booking";

/// Outcome of an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Whether the cabin can be booked for the requested range.
    pub available: bool,
    /// Why not, when `available` is false.
    pub reason: Option<String>,
}

impl Availability {
    /// The cabin is free.
    pub fn free() -> Self {
        Self {
            available: true,
            reason: None,
        }
    }

    /// The cabin cannot be booked, with a reason.
    pub fn blocked(reason: &str) -> Self {
        Self {
            available: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Decide availability from already-loaded rows.
///
/// Rules, in order:
/// 1. The range must be a valid half-open stay (at least one night).
/// 2. The cabin must exist and be active.
/// 3. If any active window exists, the stay must fit entirely inside one
///    window. Spanning two adjacent windows is not permitted. No windows
///    means the cabin is unrestricted.
/// 4. The stay must not overlap any CONFIRMED or CHECKED_IN booking.
///    PENDING bookings do not hold dates.
pub fn evaluate(
    cabin: Option<&Cabin>,
    periods: &[AvailabilityPeriod],
    bookings: &[CabinBooking],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Availability {
    let Ok(stay) = StayRange::new(check_in, check_out) else {
        return Availability::blocked(REASON_INVALID_RANGE);
    };

    if !cabin.is_some_and(|c| c.is_active) {
        return Availability::blocked(REASON_CABIN_UNAVAILABLE);
    }

    let active_windows: Vec<_> = periods.iter().filter(|p| p.is_active).collect();
    if !active_windows.is_empty() && !active_windows.iter().any(|p| p.admits(&stay)) {
        return Availability::blocked(REASON_OUTSIDE_WINDOW);
    }

    let conflict = bookings
        .iter()
        .filter(|b| b.blocks_availability())
        .filter_map(|b| StayRange::new(b.check_in_date, b.check_out_date).ok())
        .any(|existing| existing.overlaps(&stay));
    if conflict {
        return Availability::blocked(REASON_DATE_CONFLICT);
    }

    Availability::free()
}

/// Read-only availability checking service.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Cabin repository.
    cabin_repo: Arc<CabinRepository>,
    /// Availability period repository.
    period_repo: Arc<AvailabilityPeriodRepository>,
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
}

impl AvailabilityService {
    /// Creates a new availability service.
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

    /// Check whether a cabin is free for `[check_in, check_out)`.
    ///
    /// Read-only; identical inputs with no intervening writes yield
    /// identical results.
    pub async fn check_availability(
        &self,
        cabin_id: CabinId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<Availability> {
        if StayRange::new(check_in, check_out).is_err() {
            return Ok(Availability::blocked(REASON_INVALID_RANGE));
        }

        let Some(cabin) = self.cabin_repo.find_by_id(cabin_id).await? else {
            return Ok(Availability::blocked(REASON_CABIN_UNAVAILABLE));
        };

        let periods = self.period_repo.find_active_for_cabin(cabin_id).await?;
        let bookings = self.booking_repo.find_blocking_for_cabin(cabin_id).await?;

        Ok(evaluate(
            Some(&cabin),
            &periods,
            &bookings,
            check_in,
            check_out,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use medistay_core::types::{BookingId, Money, PatientId, PeriodId};
    use medistay_entity::booking::{BookingStatus, PaymentStatus};

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).expect("valid date")
    }

    fn cabin() -> Cabin {
        Cabin {
            id: CabinId::new(),
            name: "Cabin C101".to_string(),
            description: None,
            capacity: 2,
            price_per_night: Money::from_major(100),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn period(cabin_id: CabinId, start: NaiveDate, end: NaiveDate) -> AvailabilityPeriod {
        AvailabilityPeriod {
            id: PeriodId::new(),
            cabin_id,
            start_date: start,
            end_date: end,
            is_active: true,
            reason: None,
            created_at: Utc::now(),
        }
    }

    fn booking(
        cabin_id: CabinId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: BookingStatus,
    ) -> CabinBooking {
        CabinBooking {
            id: BookingId::new(),
            booking_number: "CB-000001-TEST".to_string(),
            cabin_id,
            patient_id: PatientId::new(),
            check_in_date: check_in,
            check_out_date: check_out,
            number_of_nights: (check_out - check_in).num_days() as i32,
            number_of_guests: 1,
            total_amount: Money::from_major(100),
            status,
            payment_status: PaymentStatus::Pending,
            guest_name: "Test Guest".to_string(),
            guest_phone: None,
            guest_email: None,
            notes: None,
            confirmed_at: None,
            checked_in_at: None,
            checked_out_at: None,
            cancelled_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        let c = cabin();
        let out = evaluate(Some(&c), &[], &[], d(6, 4), d(6, 1));
        assert!(!out.available);
        assert_eq!(out.reason.as_deref(), Some(REASON_INVALID_RANGE));

        let out = evaluate(Some(&c), &[], &[], d(6, 1), d(6, 1));
        assert!(!out.available);
    }

    #[test]
    fn test_missing_or_inactive_cabin_rejected() {
        let out = evaluate(None, &[], &[], d(6, 1), d(6, 4));
        assert_eq!(out.reason.as_deref(), Some(REASON_CABIN_UNAVAILABLE));

        let mut c = cabin();
        c.is_active = false;
        let out = evaluate(Some(&c), &[], &[], d(6, 1), d(6, 4));
        assert_eq!(out.reason.as_deref(), Some(REASON_CABIN_UNAVAILABLE));
    }

    #[test]
    fn test_no_windows_means_unrestricted() {
        let c = cabin();
        let out = evaluate(Some(&c), &[], &[], d(6, 1), d(6, 4));
        assert!(out.available);
    }

    #[test]
    fn test_confirmed_booking_conflict() {
        // Existing CONFIRMED stay 06-02 → 06-05; request 06-01 → 06-03
        // overlaps on 06-02.
        let c = cabin();
        let existing = booking(c.id, d(6, 2), d(6, 5), BookingStatus::Confirmed);
        let out = evaluate(Some(&c), &[], std::slice::from_ref(&existing), d(6, 1), d(6, 3));
        assert!(!out.available);
        assert_eq!(out.reason.as_deref(), Some(REASON_DATE_CONFLICT));
    }

    #[test]
    fn test_back_to_back_turnover_allowed() {
        // Request starts exactly on the existing checkout day.
        let c = cabin();
        let existing = booking(c.id, d(6, 2), d(6, 5), BookingStatus::Confirmed);
        let out = evaluate(Some(&c), &[], std::slice::from_ref(&existing), d(6, 5), d(6, 7));
        assert!(out.available);
    }

    #[test]
    fn test_pending_booking_does_not_block() {
        let c = cabin();
        let existing = booking(c.id, d(6, 2), d(6, 5), BookingStatus::Pending);
        let out = evaluate(Some(&c), &[], std::slice::from_ref(&existing), d(6, 1), d(6, 3));
        assert!(out.available);
    }

    #[test]
    fn test_cancelled_and_checked_out_do_not_block() {
        let c = cabin();
        let existing = vec![
            booking(c.id, d(6, 2), d(6, 5), BookingStatus::Cancelled),
            booking(c.id, d(6, 2), d(6, 5), BookingStatus::CheckedOut),
        ];
        let out = evaluate(Some(&c), &[], &existing, d(6, 1), d(6, 3));
        assert!(out.available);
    }

    #[test]
    fn test_stay_inside_window_allowed() {
        let c = cabin();
        let windows = vec![period(c.id, d(7, 1), d(7, 10))];
        let out = evaluate(Some(&c), &windows, &[], d(7, 5), d(7, 9));
        assert!(out.available);
    }

    #[test]
    fn test_stay_past_window_end_rejected() {
        let c = cabin();
        let windows = vec![period(c.id, d(7, 1), d(7, 10))];
        let out = evaluate(Some(&c), &windows, &[], d(7, 8), d(7, 12));
        assert!(!out.available);
        assert_eq!(out.reason.as_deref(), Some(REASON_OUTSIDE_WINDOW));
    }

    #[test]
    fn test_stay_spanning_adjacent_windows_rejected() {
        // Two contiguous windows; the stay must fit inside one of them.
        let c = cabin();
        let windows = vec![
            period(c.id, d(7, 1), d(7, 10)),
            period(c.id, d(7, 10), d(7, 20)),
        ];
        let out = evaluate(Some(&c), &windows, &[], d(7, 8), d(7, 12));
        assert!(!out.available);
        assert_eq!(out.reason.as_deref(), Some(REASON_OUTSIDE_WINDOW));
    }

    #[test]
    fn test_inactive_window_is_ignored() {
        let c = cabin();
        let mut window = period(c.id, d(7, 1), d(7, 10));
        window.is_active = false;
        // The only window is inactive, so the cabin is unrestricted.
        let out = evaluate(Some(&c), std::slice::from_ref(&window), &[], d(8, 1), d(8, 3));
        assert!(out.available);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let c = cabin();
        let existing = booking(c.id, d(6, 2), d(6, 5), BookingStatus::Confirmed);
        let first = evaluate(Some(&c), &[], std::slice::from_ref(&existing), d(6, 1), d(6, 3));
        let second = evaluate(Some(&c), &[], std::slice::from_ref(&existing), d(6, 1), d(6, 3));
        assert_eq!(first, second);
    }
}
