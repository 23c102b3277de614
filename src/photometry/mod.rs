/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Photometry module
//!
//! This module turns apparent i-band photometry into absolute magnitudes,
//! combining the distance modulus from [`crate::cosmology`] with a tabulated
//! k-correction.

mod batch;
mod errors;
mod kcorrection;
mod magnitude;

pub use batch::{compute_catalog_magnitudes, CatalogMagnitudes, BAD_REDSHIFT_SENTINEL};
pub use errors::{PhotometryError, Result};
pub use kcorrection::KCorrectionTable;
pub use magnitude::{
    absolute_magnitude, AbsoluteMagnitudeCalculator, MagnitudeConfig, MagnitudeSummary,
    ObjectPhotometry, DEFAULT_KCORRECTION_REDSHIFT,
};
