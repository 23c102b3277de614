/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Cosmological distances and times
//!
//! All distances derive from the comoving distance, integrated with a
//! fixed-step Simpson rule from z = 0. Lookback times integrate
//! c / ((1+z) H(z)) between two redshifts and are converted to Gyr.
//!
//! Accuracy is controlled only by the step counts in [`IntegrationSettings`].
//! For very large redshift ranges the step size grows with the range, so the
//! step count has to be scaled up by the caller to keep the same precision.

use super::errors::{CosmologyError, Result};
use super::model::CosmologyModel;
use super::parameters::CosmologyParameters;
use crate::utils::constants::{
    DEFAULT_DISTANCE_STEPS, DEFAULT_TIME_STEPS, DISTANCE_MODULUS_OFFSET, GYR_KM_S_PER_MPC,
    SPEED_OF_LIGHT_KM_S, Z_RECOMBINATION,
};
use crate::utils::{integrate_simpson, sphere_volume_gpc3};
use log::trace;
use serde::{Deserialize, Serialize};

/// Simpson subinterval counts for the distance and time integrals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    /// Subintervals for comoving-distance integrals
    pub distance_steps: usize,
    /// Subintervals for lookback-time integrals
    pub time_steps: usize,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            distance_steps: DEFAULT_DISTANCE_STEPS,
            time_steps: DEFAULT_TIME_STEPS,
        }
    }
}

/// Distances to a single redshift
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub redshift: f64,
    /// Comoving (line-of-sight) distance in Mpc
    pub comoving_mpc: f64,
    /// Luminosity distance in Mpc
    pub luminosity_mpc: f64,
    /// Angular-diameter distance in Mpc
    pub angular_diameter_mpc: f64,
    /// Distance modulus; `-inf` at z = 0 where the luminosity distance vanishes
    pub distance_modulus: f64,
}

/// Computes distances and times for a fixed cosmology
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCalculator {
    model: CosmologyModel,
    settings: IntegrationSettings,
}

impl DistanceCalculator {
    /// Create a calculator with the default step counts
    pub fn new(params: CosmologyParameters) -> Self {
        Self::with_settings(params, IntegrationSettings::default())
    }

    /// Create a calculator with explicit step counts
    pub fn with_settings(params: CosmologyParameters, settings: IntegrationSettings) -> Self {
        Self {
            model: CosmologyModel::new(params),
            settings,
        }
    }

    pub fn model(&self) -> &CosmologyModel {
        &self.model
    }

    pub fn parameters(&self) -> &CosmologyParameters {
        self.model.parameters()
    }

    pub fn settings(&self) -> &IntegrationSettings {
        &self.settings
    }

    /// Comoving distance to redshift `z` in Mpc
    pub fn comoving_distance(&self, z: f64) -> Result<f64> {
        check_redshift(z)?;
        let model = &self.model;
        let distance = self.integrate(
            |x| model.evaluate(x),
            0.0,
            z,
            self.settings.distance_steps,
        )?;
        trace!("D_C(z = {}) = {} Mpc", z, distance);
        Ok(distance)
    }

    /// Luminosity distance to redshift `z` in Mpc
    pub fn luminosity_distance(&self, z: f64) -> Result<f64> {
        Ok(self.comoving_distance(z)? * (1.0 + z))
    }

    /// Angular-diameter distance to redshift `z` in Mpc
    pub fn angular_diameter_distance(&self, z: f64) -> Result<f64> {
        Ok(self.comoving_distance(z)? / (1.0 + z))
    }

    /// Distance modulus 5 log10(D_L / Mpc) + 25
    ///
    /// # Errors
    ///
    /// `InvalidRedshift` for negative redshifts and for z = 0, where the
    /// luminosity distance is zero
    pub fn distance_modulus(&self, z: f64) -> Result<f64> {
        let luminosity = self.luminosity_distance(z)?;
        if luminosity <= 0.0 {
            return Err(CosmologyError::InvalidRedshift(z));
        }
        Ok(modulus_from_luminosity(luminosity))
    }

    /// All distances to `z` from a single integration
    pub fn distances(&self, z: f64) -> Result<DistanceResult> {
        let comoving = self.comoving_distance(z)?;
        let luminosity = comoving * (1.0 + z);
        let distance_modulus = if luminosity > 0.0 {
            modulus_from_luminosity(luminosity)
        } else {
            f64::NEG_INFINITY
        };

        Ok(DistanceResult {
            redshift: z,
            comoving_mpc: comoving,
            luminosity_mpc: luminosity,
            angular_diameter_mpc: comoving / (1.0 + z),
            distance_modulus,
        })
    }

    /// Comoving volume inside redshift `z` in Gpc^3
    pub fn comoving_volume(&self, z: f64) -> Result<f64> {
        Ok(sphere_volume_gpc3(self.comoving_distance(z)?))
    }

    /// Time in Gyr for light to travel from `z_upper` to `z_lower`
    ///
    /// The result is negative when `z_lower > z_upper`.
    pub fn lookback_time(&self, z_lower: f64, z_upper: f64) -> Result<f64> {
        check_redshift(z_lower)?;
        check_redshift(z_upper)?;
        let model = &self.model;
        let integral = self.integrate(
            |x| model.evaluate_time(x),
            z_lower,
            z_upper,
            self.settings.time_steps,
        )?;
        Ok(integral * GYR_KM_S_PER_MPC / SPEED_OF_LIGHT_KM_S)
    }

    /// Present age of the universe in Gyr (integrated to recombination)
    pub fn age_of_universe(&self) -> Result<f64> {
        self.lookback_time(0.0, Z_RECOMBINATION)
    }

    /// Age of the universe at redshift `z` in Gyr
    pub fn age_at(&self, z: f64) -> Result<f64> {
        self.lookback_time(z, Z_RECOMBINATION)
    }

    /// Light-travel time from redshift `z` in Gyr
    pub fn light_travel_time(&self, z: f64) -> Result<f64> {
        self.lookback_time(0.0, z)
    }

    fn integrate<F>(&self, f: F, lower: f64, upper: f64, steps: usize) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        // Report a non-physical expansion rate at either end by its redshift
        self.model.integrand(lower)?;
        self.model.integrand(upper)?;

        let value = integrate_simpson(f, lower, upper, steps)?;
        if !value.is_finite() {
            return Err(CosmologyError::InvalidParameter(format!(
                "expansion rate is not physical between z = {} and z = {}",
                lower, upper
            )));
        }
        Ok(value)
    }
}

fn check_redshift(z: f64) -> Result<()> {
    if z.is_finite() && z >= 0.0 {
        Ok(())
    } else {
        Err(CosmologyError::InvalidRedshift(z))
    }
}

fn modulus_from_luminosity(luminosity_mpc: f64) -> f64 {
    5.0 * luminosity_mpc.log10() + DISTANCE_MODULUS_OFFSET
}
