//! Booking lifecycle transitions.
//!
//! Transition legality lives on [`BookingStatus`]; this module applies a
//! transition to a booking, stamping the corresponding timestamp.

use chrono::{DateTime, Utc};

use medistay_core::error::AppError;
use medistay_core::result::AppResult;
use medistay_entity::booking::{BookingStatus, CabinBooking};

/// Move a booking to `next`, stamping the matching lifecycle timestamp.
///
/// Returns a conflict error when the transition is illegal (e.g. cancelling
/// a CHECKED_OUT booking, or skipping CONFIRMED).
pub fn apply_transition(
    booking: &mut CabinBooking,
    next: BookingStatus,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if !booking.status.can_transition_to(next) {
        return Err(AppError::conflict(format!(
            "Booking {} cannot move from {} to {}",
            booking.booking_number, booking.status, next
        )));
    }

    match next {
        BookingStatus::Confirmed => booking.confirmed_at = Some(now),
        BookingStatus::CheckedIn => booking.checked_in_at = Some(now),
        BookingStatus::CheckedOut => booking.checked_out_at = Some(now),
        BookingStatus::Cancelled => booking.cancelled_at = Some(now),
        BookingStatus::Pending => {}
    }
    booking.status = next;
    booking.updated_at = now;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use medistay_core::types::{BookingId, CabinId, Money, PatientId};
    use medistay_entity::booking::PaymentStatus;

    fn booking(status: BookingStatus) -> CabinBooking {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        let check_out = NaiveDate::from_ymd_opt(2025, 6, 4).expect("valid date");
        CabinBooking {
            id: BookingId::new(),
            booking_number: "CB-000001-TEST".to_string(),
            cabin_id: CabinId::new(),
            patient_id: PatientId::new(),
            check_in_date: check_in,
            check_out_date: check_out,
            number_of_nights: 3,
            number_of_guests: 2,
            total_amount: Money::from_major(300),
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
    fn test_confirm_stamps_timestamp() {
        let mut b = booking(BookingStatus::Pending);
        let now = Utc::now();
        apply_transition(&mut b, BookingStatus::Confirmed, now).expect("legal transition");
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert_eq!(b.confirmed_at, Some(now));
        assert!(b.cancelled_at.is_none());
    }

    #[test]
    fn test_cancel_stamps_timestamp() {
        let mut b = booking(BookingStatus::Confirmed);
        let now = Utc::now();
        apply_transition(&mut b, BookingStatus::Cancelled, now).expect("legal transition");
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert_eq!(b.cancelled_at, Some(now));
    }

    #[test]
    fn test_checked_out_cannot_be_cancelled() {
        let mut b = booking(BookingStatus::CheckedOut);
        let err = apply_transition(&mut b, BookingStatus::Cancelled, Utc::now())
            .expect_err("illegal transition");
        assert_eq!(err.kind, medistay_core::error::ErrorKind::Conflict);
        assert_eq!(b.status, BookingStatus::CheckedOut);
    }

    #[test]
    fn test_cancelled_cannot_be_cancelled_again() {
        let mut b = booking(BookingStatus::Cancelled);
        assert!(apply_transition(&mut b, BookingStatus::Cancelled, Utc::now()).is_err());
    }

    #[test]
    fn test_cannot_skip_confirmation() {
        let mut b = booking(BookingStatus::Pending);
        assert!(apply_transition(&mut b, BookingStatus::CheckedIn, Utc::now()).is_err());
    }
}
