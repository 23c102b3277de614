/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for configuration loading

use std::io;
use thiserror::Error;

/// Errors that can occur while loading a pipeline configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
