//! Request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use medistay_core::types::{CabinId, Money};
use medistay_entity::booking::PaymentStatus;

/// POST /api/bookings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The cabin to book.
    pub cabin_id: CabinId,
    /// First occupied day.
    pub check_in_date: NaiveDate,
    /// Vacate day.
    pub check_out_date: NaiveDate,
    /// Number of guests staying.
    #[validate(range(min = 1))]
    pub number_of_guests: i32,
    /// Contact name for the stay.
    #[validate(length(min = 1))]
    pub guest_name: String,
    /// Contact phone number.
    pub guest_phone: Option<String>,
    /// Contact email address.
    #[validate(email)]
    pub guest_email: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Query parameters for GET /api/cabins/{id}/availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// First occupied day.
    pub check_in: NaiveDate,
    /// Vacate day.
    pub check_out: NaiveDate,
}

/// POST /api/admin/cabins
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCabinRequest {
    /// Display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Maximum number of guests.
    #[validate(range(min = 1))]
    pub capacity: i32,
    /// Nightly price in minor currency units (cents).
    #[validate(range(min = 0))]
    pub price_per_night_cents: i64,
}

impl CreateCabinRequest {
    /// The nightly price as a money value.
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_per_night_cents)
    }
}

/// PUT /api/admin/cabins/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCabinRequest {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New nightly price in minor currency units.
    pub price_per_night_cents: Option<i64>,
    /// Activate or deactivate the cabin.
    pub is_active: Option<bool>,
}

/// POST /api/admin/cabins/{id}/periods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodRequest {
    /// First bookable check-in date.
    pub start_date: NaiveDate,
    /// Last permitted check-out date.
    pub end_date: NaiveDate,
    /// Optional admin note.
    pub reason: Option<String>,
}

/// PUT /api/admin/periods/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePeriodRequest {
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
    /// Enable or disable the window.
    pub is_active: Option<bool>,
    /// New admin note.
    pub reason: Option<String>,
}

/// PUT /api/admin/bookings/{id}/payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusRequest {
    /// The new payment state.
    pub payment_status: PaymentStatus,
}
