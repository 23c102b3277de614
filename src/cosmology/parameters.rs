/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Flat ΛCDM cosmological parameters

use super::errors::{CosmologyError, Result};
use serde::Serialize;

/// Parameters of a flat ΛCDM cosmology
///
/// The vacuum density is always derived as `1 - omega_r - omega_m`, so the
/// density parameters sum to one by construction. Values are fixed once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CosmologyParameters {
    h0: f64,
    omega_m: f64,
    omega_r: f64,
    omega_lambda: f64,
}

impl CosmologyParameters {
    /// Create flat-cosmology parameters
    ///
    /// # Arguments
    ///
    /// * `h0` - Hubble constant in km/s/Mpc
    /// * `omega_m` - Matter density parameter
    /// * `omega_r` - Radiation density parameter
    ///
    /// # Returns
    ///
    /// The parameters, or `InvalidParameter` if a value is not finite or `h0`
    /// is not positive
    pub fn flat(h0: f64, omega_m: f64, omega_r: f64) -> Result<Self> {
        if !h0.is_finite() || h0 <= 0.0 {
            return Err(CosmologyError::InvalidParameter(format!(
                "Hubble constant must be positive and finite, got {}",
                h0
            )));
        }

        if !omega_m.is_finite() || !omega_r.is_finite() {
            return Err(CosmologyError::InvalidParameter(format!(
                "Density parameters must be finite, got omega_m = {}, omega_r = {}",
                omega_m, omega_r
            )));
        }

        Ok(Self {
            h0,
            omega_m,
            omega_r,
            omega_lambda: 1.0 - omega_r - omega_m,
        })
    }

    /// Parameters used for the DR15Q catalog (Ned Wright's benchmark values,
    /// radiation density from Ryden)
    pub fn dr15q() -> Self {
        Self {
            h0: 69.6,
            omega_m: 0.286,
            omega_r: 9.0e-5,
            omega_lambda: 1.0 - 9.0e-5 - 0.286,
        }
    }

    /// Parameters used for the DR14Q catalog
    pub fn dr14q() -> Self {
        Self {
            h0: 67.8,
            omega_m: 0.308,
            omega_r: 9.0e-5,
            omega_lambda: 1.0 - 9.0e-5 - 0.308,
        }
    }

    /// Hubble constant in km/s/Mpc
    pub fn h0(&self) -> f64 {
        self.h0
    }

    /// Matter density parameter
    pub fn omega_m(&self) -> f64 {
        self.omega_m
    }

    /// Radiation density parameter
    pub fn omega_r(&self) -> f64 {
        self.omega_r
    }

    /// Vacuum density parameter
    pub fn omega_lambda(&self) -> f64 {
        self.omega_lambda
    }
}

impl Default for CosmologyParameters {
    fn default() -> Self {
        Self::dr15q()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flatness() {
        let params = CosmologyParameters::flat(69.6, 0.286, 9.0e-5).unwrap();
        assert_relative_eq!(params.omega_lambda(), 0.71391, epsilon = 1e-12);
        assert_relative_eq!(
            params.omega_m() + params.omega_r() + params.omega_lambda(),
            1.0,
            epsilon = 1e-15
        );
        assert_eq!(params, CosmologyParameters::default());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            CosmologyParameters::flat(0.0, 0.3, 0.0),
            Err(CosmologyError::InvalidParameter(_))
        ));
        assert!(CosmologyParameters::flat(-70.0, 0.3, 0.0).is_err());
        assert!(CosmologyParameters::flat(70.0, f64::NAN, 0.0).is_err());
        assert!(CosmologyParameters::flat(70.0, 0.3, f64::INFINITY).is_err());
    }
}
