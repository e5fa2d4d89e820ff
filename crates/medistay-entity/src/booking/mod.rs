//! Cabin booking entity and lifecycle enums.

pub mod model;
pub mod number;
pub mod payment;
pub mod status;

pub use model::{CabinBooking, NewBooking};
pub use payment::PaymentStatus;
pub use status::BookingStatus;
