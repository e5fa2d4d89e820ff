//! HTTP request handlers.

pub mod admin;
pub mod booking;
pub mod cabin;
pub mod health;
