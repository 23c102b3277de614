/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the emission-line module

use thiserror::Error;

/// Errors that can occur in emission-line calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("Unknown emission line: {0}")]
    UnknownLine(String),

    #[error("Invalid wavelength: {0}")]
    InvalidWavelength(f64),
}

/// Result type for emission-line operations
pub type Result<T> = std::result::Result<T, LineError>;
