/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Expansion-rate integrand of a flat ΛCDM cosmology

use super::errors::{CosmologyError, Result};
use super::parameters::CosmologyParameters;
use crate::utils::constants::SPEED_OF_LIGHT_KM_S;

/// Evaluates the differential comoving distance c / H(z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmologyModel {
    params: CosmologyParameters,
}

impl CosmologyModel {
    pub fn new(params: CosmologyParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &CosmologyParameters {
        &self.params
    }

    /// E(z)² = ΩR(1+z)⁴ + ΩM(1+z)³ + ΩΛ
    pub fn expansion_rate_squared(&self, z: f64) -> f64 {
        let a_inv = 1.0 + z;
        self.params.omega_r() * a_inv.powi(4)
            + self.params.omega_m() * a_inv.powi(3)
            + self.params.omega_lambda()
    }

    /// Differential comoving distance in Mpc per unit redshift
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when E(z)² is not positive at `z`
    pub fn integrand(&self, z: f64) -> Result<f64> {
        let e2 = self.expansion_rate_squared(z);
        if e2.is_nan() || e2 <= 0.0 {
            return Err(CosmologyError::InvalidParameter(format!(
                "E(z)^2 = {} is not positive at z = {} (omega_m = {}, omega_r = {}, omega_lambda = {})",
                e2,
                z,
                self.params.omega_m(),
                self.params.omega_r(),
                self.params.omega_lambda()
            )));
        }
        Ok(self.evaluate(z))
    }

    /// Integrand of the lookback time, c / ((1+z) H(z)), in Mpc
    pub fn time_integrand(&self, z: f64) -> Result<f64> {
        self.integrand(z)?;
        Ok(self.evaluate_time(z))
    }

    /// Unchecked integrand for the inner integration loop; NaN where E(z)² < 0
    pub(crate) fn evaluate(&self, z: f64) -> f64 {
        SPEED_OF_LIGHT_KM_S / (self.params.h0() * self.expansion_rate_squared(z).sqrt())
    }

    /// Unchecked lookback-time integrand
    pub(crate) fn evaluate_time(&self, z: f64) -> f64 {
        self.evaluate(z) / (1.0 + z)
    }
}
