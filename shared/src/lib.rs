//! Shared types and models for the Weather Trends API
//!
//! This crate contains the weather domain types shared between the backend
//! service and its tests.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
