//! # medistay-service
//!
//! Business logic for Medistay: the availability checker, the booking
//! writer and lifecycle transitions, and cabin/period administration.
//! Services orchestrate repositories and hold no HTTP concerns.

pub mod availability;
pub mod booking;
pub mod cabin;
pub mod context;

pub use context::RequestContext;
