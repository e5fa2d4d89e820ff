//! User role enumeration.
//!
//! Medistay does not manage user accounts; it only needs to know the
//! caller's role and identity from verified JWT claims.

pub mod role;

pub use role::UserRole;
