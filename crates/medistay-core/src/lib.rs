//! # medistay-core
//!
//! Core crate for Medistay. Contains configuration schemas, typed
//! identifiers, the money and stay-range types, the clock abstraction,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Medistay crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
