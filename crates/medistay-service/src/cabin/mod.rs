//! Cabin and availability-period administration.

pub mod service;

pub use service::CabinService;
