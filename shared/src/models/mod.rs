//! Domain models for the Weather Trends API

pub mod weather;

pub use weather::*;
