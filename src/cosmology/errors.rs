/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the cosmology module

use crate::utils::UtilsError;
use thiserror::Error;

/// Errors that can occur while evaluating cosmological quantities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmologyError {
    /// Cosmological parameters that give a non-physical expansion rate
    #[error("Invalid cosmological parameter: {0}")]
    InvalidParameter(String),

    /// Negative or non-finite redshift, or a redshift where the requested
    /// quantity is undefined (distance modulus at z = 0)
    #[error("Invalid redshift: {0}")]
    InvalidRedshift(f64),

    #[error("Integration error: {0}")]
    Integration(#[from] UtilsError),
}

/// Result type for cosmology operations
pub type Result<T> = std::result::Result<T, CosmologyError>;
