//! Admin-only handlers.

pub mod bookings;
pub mod cabins;
pub mod periods;
