//! Shared value types used across Medistay crates.

pub mod id;
pub mod money;
pub mod pagination;
pub mod stay_range;

pub use id::{BookingId, CabinId, PatientId, PeriodId};
pub use money::Money;
pub use pagination::{PageRequest, PageResponse};
pub use stay_range::StayRange;
