//! Repository implementations for all Medistay entities.

pub mod availability;
pub mod booking;
pub mod cabin;

pub use availability::AvailabilityPeriodRepository;
pub use booking::BookingRepository;
pub use cabin::CabinRepository;
