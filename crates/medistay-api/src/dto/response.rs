//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use medistay_core::types::pagination::PageResponse;
use medistay_core::types::{BookingId, CabinId, PatientId, PeriodId};
use medistay_entity::availability::AvailabilityPeriod;
use medistay_entity::booking::CabinBooking;
use medistay_entity::cabin::Cabin;
use medistay_service::availability::Availability;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}

/// Cabin summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinResponse {
    /// Cabin ID.
    pub id: CabinId,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Nightly price in minor currency units.
    pub price_per_night_cents: i64,
    /// Nightly price formatted for display.
    pub price_per_night: String,
    /// Whether the cabin is bookable.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Cabin> for CabinResponse {
    fn from(cabin: Cabin) -> Self {
        Self {
            id: cabin.id,
            name: cabin.name,
            description: cabin.description,
            capacity: cabin.capacity,
            price_per_night_cents: cabin.price_per_night.cents(),
            price_per_night: cabin.price_per_night.to_string(),
            is_active: cabin.is_active,
            created_at: cabin.created_at,
        }
    }
}

/// Availability period summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodResponse {
    /// Period ID.
    pub id: PeriodId,
    /// The cabin the window applies to.
    pub cabin_id: CabinId,
    /// First bookable check-in date.
    pub start_date: NaiveDate,
    /// Last permitted check-out date.
    pub end_date: NaiveDate,
    /// Whether the window is in force.
    pub is_active: bool,
    /// Admin note.
    pub reason: Option<String>,
}

impl From<AvailabilityPeriod> for PeriodResponse {
    fn from(period: AvailabilityPeriod) -> Self {
        Self {
            id: period.id,
            cabin_id: period.cabin_id,
            start_date: period.start_date,
            end_date: period.end_date,
            is_active: period.is_active,
            reason: period.reason,
        }
    }
}

/// Booking summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Booking ID.
    pub id: BookingId,
    /// Human-readable reference.
    pub booking_number: String,
    /// The booked cabin.
    pub cabin_id: CabinId,
    /// The owning patient.
    pub patient_id: PatientId,
    /// First occupied day.
    pub check_in_date: NaiveDate,
    /// Vacate day.
    pub check_out_date: NaiveDate,
    /// Stay length in nights.
    pub number_of_nights: i32,
    /// Number of guests.
    pub number_of_guests: i32,
    /// Total in minor currency units.
    pub total_amount_cents: i64,
    /// Total formatted for display.
    pub total_amount: String,
    /// Lifecycle state.
    pub status: String,
    /// Payment state.
    pub payment_status: String,
    /// Contact name.
    pub guest_name: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<CabinBooking> for BookingResponse {
    fn from(booking: CabinBooking) -> Self {
        Self {
            id: booking.id,
            booking_number: booking.booking_number,
            cabin_id: booking.cabin_id,
            patient_id: booking.patient_id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            number_of_nights: booking.number_of_nights,
            number_of_guests: booking.number_of_guests,
            total_amount_cents: booking.total_amount.cents(),
            total_amount: booking.total_amount.to_string(),
            status: booking.status.to_string(),
            payment_status: booking.payment_status.to_string(),
            guest_name: booking.guest_name,
            created_at: booking.created_at,
        }
    }
}

/// Availability check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the cabin can be booked for the requested range.
    pub available: bool,
    /// Why not, when `available` is false.
    pub reason: Option<String>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            available: availability.available,
            reason: availability.reason,
        }
    }
}

/// Map a page of entities into a page of response DTOs.
pub fn map_page<E, R: Serialize + From<E>>(page: PageResponse<E>) -> PageResponse<R>
where
    E: Serialize,
{
    PageResponse {
        items: page.items.into_iter().map(R::from).collect(),
        page: page.page,
        page_size: page.page_size,
        total_items: page.total_items,
        total_pages: page.total_pages,
        has_next: page.has_next,
        has_previous: page.has_previous,
    }
}
