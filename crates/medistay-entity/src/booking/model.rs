//! Cabin booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use medistay_core::types::{BookingId, CabinId, Money, PatientId};

use super::payment::PaymentStatus;
use super::status::BookingStatus;

/// A patient's reservation of a cabin for a date range.
///
/// The stay occupies `[check_in_date, check_out_date)` — the checkout day
/// itself is free for the next arrival.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CabinBooking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Human-readable reference, e.g. `CB-483921-X7QF`.
    pub booking_number: String,
    /// The booked cabin.
    pub cabin_id: CabinId,
    /// The patient who owns the booking.
    pub patient_id: PatientId,
    /// First occupied day.
    pub check_in_date: NaiveDate,
    /// Vacate day (not occupied).
    pub check_out_date: NaiveDate,
    /// Derived stay length in nights.
    pub number_of_nights: i32,
    /// Number of guests staying.
    pub number_of_guests: i32,
    /// Total price in minor currency units (nights × nightly price).
    pub total_amount: Money,
    /// Lifecycle state.
    pub status: BookingStatus,
    /// Payment state.
    pub payment_status: PaymentStatus,
    /// Contact name for the stay.
    pub guest_name: String,
    /// Contact phone number.
    pub guest_phone: Option<String>,
    /// Contact email address.
    pub guest_email: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When an admin confirmed the booking.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// When the patient checked in.
    pub checked_in_at: Option<DateTime<Utc>>,
    /// When the patient checked out.
    pub checked_out_at: Option<DateTime<Utc>>,
    /// When the booking was cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl CabinBooking {
    /// Whether this booking holds its dates against new requests.
    pub fn blocks_availability(&self) -> bool {
        self.status.blocks_availability()
    }

    /// Whether the given patient owns this booking.
    pub fn is_owned_by(&self, patient_id: PatientId) -> bool {
        self.patient_id == patient_id
    }
}

/// Insert payload for a new booking. Status starts as PENDING with payment
/// PENDING; lifecycle timestamps start unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    /// Generated reference.
    pub booking_number: String,
    /// The cabin being booked.
    pub cabin_id: CabinId,
    /// The requesting patient.
    pub patient_id: PatientId,
    /// First occupied day.
    pub check_in_date: NaiveDate,
    /// Vacate day.
    pub check_out_date: NaiveDate,
    /// Derived stay length in nights.
    pub number_of_nights: i32,
    /// Number of guests.
    pub number_of_guests: i32,
    /// Computed total in minor currency units.
    pub total_amount: Money,
    /// Contact name.
    pub guest_name: String,
    /// Contact phone number.
    pub guest_phone: Option<String>,
    /// Contact email address.
    pub guest_email: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}
