/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Pipeline configuration
//!
//! The tunable values are the Hubble constant, the matter and radiation
//! densities, the Simpson step counts and the magnitude redshift modes. The
//! vacuum density is not configurable; it always follows from flatness.
//! Configurations are JSON files, and every field is optional:
//!
//! ```json
//! {
//!   "cosmology": { "h0": 69.6, "omega_m": 0.286, "omega_r": 9e-5 },
//!   "integration": { "distance_steps": 100000, "time_steps": 1000000 },
//!   "magnitude": { "normalize_to_fixed_z": null, "kcorrection_fixed_z": 2.0 },
//!   "kcorrection_table": "k_corr_tab.dat"
//! }
//! ```

mod errors;

pub use errors::{ConfigError, Result};

use crate::cosmology::{CosmologyParameters, DistanceCalculator, IntegrationSettings};
use crate::photometry::MagnitudeConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Cosmological inputs; Ω_Λ is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmologySettings {
    /// Hubble constant in km/s/Mpc
    pub h0: f64,
    pub omega_m: f64,
    pub omega_r: f64,
}

impl Default for CosmologySettings {
    fn default() -> Self {
        let params = CosmologyParameters::default();
        Self {
            h0: params.h0(),
            omega_m: params.omega_m(),
            omega_r: params.omega_r(),
        }
    }
}

impl CosmologySettings {
    /// Build validated flat-cosmology parameters
    pub fn to_parameters(&self) -> Result<CosmologyParameters> {
        CosmologyParameters::flat(self.h0, self.omega_m, self.omega_r)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Complete configuration of a magnitude run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub cosmology: CosmologySettings,
    pub integration: IntegrationSettings,
    pub magnitude: MagnitudeConfig,
    /// Path to the k-correction table
    pub kcorrection_table: Option<PathBuf>,
}

impl PipelineConfig {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameters and step counts
    pub fn validate(&self) -> Result<()> {
        self.cosmology.to_parameters()?;

        if self.integration.distance_steps == 0 || self.integration.time_steps == 0 {
            return Err(ConfigError::Invalid(
                "integration step counts must be positive".to_string(),
            ));
        }

        validate_magnitude(&self.magnitude)
    }

    /// Distance calculator for this configuration
    pub fn distance_calculator(&self) -> Result<DistanceCalculator> {
        Ok(DistanceCalculator::with_settings(
            self.cosmology.to_parameters()?,
            self.integration,
        ))
    }
}

/// Check the fixed redshifts of the magnitude modes
///
/// The distance modulus is undefined at z = 0, so a fixed distance redshift
/// must be strictly positive.
pub fn validate_magnitude(magnitude: &MagnitudeConfig) -> Result<()> {
    if let Some(z) = magnitude.normalize_to_fixed_z {
        if !z.is_finite() || z <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fixed distance redshift must be finite and positive, got {}",
                z
            )));
        }
    }

    if let Some(z) = magnitude.kcorrection_fixed_z {
        if !z.is_finite() || z < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fixed k-correction redshift must be finite and non-negative, got {}",
                z
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cosmology.h0, 69.6);
        assert_eq!(config.magnitude.kcorrection_fixed_z, Some(2.0));
        assert_eq!(config.magnitude.normalize_to_fixed_z, None);
        assert_eq!(config.kcorrection_table, None);
    }

    #[test]
    fn test_zero_kcorrection_redshift_allowed() {
        let config =
            PipelineConfig::from_json(r#"{"magnitude": {"kcorrection_fixed_z": 0.0}}"#).unwrap();
        assert_eq!(config.magnitude.kcorrection_fixed_z, Some(0.0));
    }

    #[test]
    fn test_partial_json() {
        let config = PipelineConfig::from_json(r#"{"cosmology": {"h0": 67.8, "omega_m": 0.308}}"#)
            .unwrap();
        assert_eq!(config.cosmology.h0, 67.8);
        assert_eq!(config.cosmology.omega_r, 9.0e-5);
        assert_eq!(config.integration, IntegrationSettings::default());

        let params = config.cosmology.to_parameters().unwrap();
        assert_eq!(params, CosmologyParameters::dr14q());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PipelineConfig::from_json(r#"{"cosmology": {"h0": -1.0}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json(r#"{"integration": {"time_steps": 0}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json(r#"{"magnitude": {"normalize_to_fixed_z": -2.0}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json(r#"{"magnitude": {"normalize_to_fixed_z": 0.0}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json(r#"{"magnitude": {"kcorrection_fixed_z": -0.1}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PipelineConfig::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
