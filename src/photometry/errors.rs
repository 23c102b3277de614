/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the photometry module

use crate::cosmology::CosmologyError;
use thiserror::Error;

/// Errors that can occur while computing k-corrections and magnitudes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhotometryError {
    /// The k-correction resource is missing or malformed
    #[error("Failed to load k-correction table: {0}")]
    TableLoadError(String),

    #[error(transparent)]
    Cosmology(#[from] CosmologyError),
}

impl PhotometryError {
    /// Whether this error only concerns the redshift of a single object
    pub fn is_invalid_redshift(&self) -> bool {
        matches!(
            self,
            PhotometryError::Cosmology(CosmologyError::InvalidRedshift(_))
        )
    }
}

/// Result type for photometry operations
pub type Result<T> = std::result::Result<T, PhotometryError>;
