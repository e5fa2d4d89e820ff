//! Cabin availability checking.

pub mod checker;

pub use checker::{Availability, AvailabilityService};
