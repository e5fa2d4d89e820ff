//! Cabin entity.

pub mod model;

pub use model::{Cabin, CreateCabin, UpdateCabin};
