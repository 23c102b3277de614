/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Absolute i-band magnitudes from apparent photometry
//!
//! M = m - A - DM - K, where m is the apparent magnitude, A the galactic
//! extinction, DM the distance modulus and K the k-correction.

use super::errors::Result;
use super::kcorrection::KCorrectionTable;
use crate::cosmology::{CosmologyError, DistanceCalculator};
use serde::{Deserialize, Serialize};

/// Redshift at which the reference pipeline evaluates k-corrections
pub const DEFAULT_KCORRECTION_REDSHIFT: f64 = 2.0;

/// Photometry of a single catalog object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectPhotometry {
    /// Apparent (PSF) magnitude in the i band
    pub apparent_magnitude: f64,
    /// i-band galactic extinction in magnitudes
    pub galactic_extinction: f64,
    pub redshift: f64,
}

impl ObjectPhotometry {
    pub fn new(apparent_magnitude: f64, galactic_extinction: f64, redshift: f64) -> Self {
        Self {
            apparent_magnitude,
            galactic_extinction,
            redshift,
        }
    }
}

/// Which redshift feeds the distance modulus and the k-correction
///
/// `None` uses the object's own redshift, `Some(z)` a fixed normalisation
/// redshift for every object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnitudeConfig {
    pub normalize_to_fixed_z: Option<f64>,
    pub kcorrection_fixed_z: Option<f64>,
}

impl Default for MagnitudeConfig {
    fn default() -> Self {
        Self {
            normalize_to_fixed_z: None,
            kcorrection_fixed_z: Some(DEFAULT_KCORRECTION_REDSHIFT),
        }
    }
}

/// Distances and magnitude of one object, for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnitudeSummary {
    pub redshift: f64,
    pub comoving_mpc: f64,
    pub luminosity_mpc: f64,
    pub absolute_magnitude: f64,
}

/// Absolute magnitude from its four inputs
pub fn absolute_magnitude(
    apparent_magnitude: f64,
    galactic_extinction: f64,
    distance_modulus: f64,
    k_correction: f64,
) -> f64 {
    apparent_magnitude - galactic_extinction - distance_modulus - k_correction
}

/// Combines distances and k-corrections into absolute magnitudes
#[derive(Debug, Clone)]
pub struct AbsoluteMagnitudeCalculator {
    distances: DistanceCalculator,
    kcorrections: KCorrectionTable,
    config: MagnitudeConfig,
}

impl AbsoluteMagnitudeCalculator {
    pub fn new(
        distances: DistanceCalculator,
        kcorrections: KCorrectionTable,
        config: MagnitudeConfig,
    ) -> Self {
        Self {
            distances,
            kcorrections,
            config,
        }
    }

    pub fn distances(&self) -> &DistanceCalculator {
        &self.distances
    }

    pub fn kcorrections(&self) -> &KCorrectionTable {
        &self.kcorrections
    }

    pub fn config(&self) -> &MagnitudeConfig {
        &self.config
    }

    /// Redshift used for the object's distance modulus
    ///
    /// Objects with a negative redshift are rejected even when a fixed
    /// normalisation redshift is configured.
    pub fn distance_redshift(&self, object: &ObjectPhotometry) -> Result<f64> {
        check_object_redshift(object)?;
        Ok(self.config.normalize_to_fixed_z.unwrap_or(object.redshift))
    }

    /// k-correction for the object
    pub fn k_correction(&self, object: &ObjectPhotometry) -> Result<f64> {
        check_object_redshift(object)?;
        let z = self.config.kcorrection_fixed_z.unwrap_or(object.redshift);
        self.kcorrections.lookup(z)
    }

    /// Absolute magnitude of the object
    ///
    /// # Errors
    ///
    /// `InvalidRedshift` for negative redshifts, and for a zero distance
    /// redshift where the distance modulus is undefined
    pub fn compute(&self, object: &ObjectPhotometry) -> Result<f64> {
        let z = self.distance_redshift(object)?;
        let modulus = self.distances.distance_modulus(z)?;
        self.compute_with_modulus(object, modulus)
    }

    /// Absolute magnitude with a distance modulus the caller already has
    pub fn compute_with_modulus(
        &self,
        object: &ObjectPhotometry,
        distance_modulus: f64,
    ) -> Result<f64> {
        let k_correction = self.k_correction(object)?;
        Ok(absolute_magnitude(
            object.apparent_magnitude,
            object.galactic_extinction,
            distance_modulus,
            k_correction,
        ))
    }

    /// Distances and magnitude of the object from a single integration
    pub fn summarize(&self, object: &ObjectPhotometry) -> Result<MagnitudeSummary> {
        let z = self.distance_redshift(object)?;
        let distances = self.distances.distances(z)?;
        if !distances.distance_modulus.is_finite() {
            return Err(CosmologyError::InvalidRedshift(z).into());
        }

        Ok(MagnitudeSummary {
            redshift: z,
            comoving_mpc: distances.comoving_mpc,
            luminosity_mpc: distances.luminosity_mpc,
            absolute_magnitude: self.compute_with_modulus(object, distances.distance_modulus)?,
        })
    }
}

fn check_object_redshift(object: &ObjectPhotometry) -> Result<()> {
    if object.redshift.is_finite() && object.redshift >= 0.0 {
        Ok(())
    } else {
        Err(CosmologyError::InvalidRedshift(object.redshift).into())
    }
}
