//! Abstractions shared across Medistay crates.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
