//! # medistay-entity
//!
//! Domain entity models for Medistay: cabins, availability periods,
//! bookings and their lifecycle enums, and the user role enum.

pub mod availability;
pub mod booking;
pub mod cabin;
pub mod user;
