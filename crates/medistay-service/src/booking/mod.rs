//! Booking creation and lifecycle management.

pub mod lifecycle;
pub mod service;

pub use service::{BookingService, CreateBookingRequest};
