//! # medistay-api
//!
//! HTTP API layer for Medistay: routes, handlers, DTOs, extractors, and
//! the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
