//! # medistay-database
//!
//! PostgreSQL connection management, migration runner, and repository
//! implementations for Medistay.

pub mod connection;
pub mod migration;
pub mod repositories;
