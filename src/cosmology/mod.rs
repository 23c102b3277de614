/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Cosmological distance engine
//!
//! This module computes distances, ages and volumes for a flat ΛCDM
//! cosmology. Parameters are passed explicitly to every calculator; nothing is
//! global and nothing is cached between calls.

mod distance;
mod errors;
mod model;
mod parameters;
mod report;

pub use distance::{DistanceCalculator, DistanceResult, IntegrationSettings};
pub use errors::{CosmologyError, Result};
pub use model::CosmologyModel;
pub use parameters::CosmologyParameters;
pub use report::RedshiftReport;
