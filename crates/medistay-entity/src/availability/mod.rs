//! Availability period entity.

pub mod model;

pub use model::{AvailabilityPeriod, CreateAvailabilityPeriod, UpdateAvailabilityPeriod};
