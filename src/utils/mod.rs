/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the cosmology, photometry and line modules
//!
//! This module provides physical constants, numerical integration rules and
//! small table helpers used throughout the crate.

pub mod constants;
mod errors;
pub mod math;

pub use errors::{Result, UtilsError};
pub use math::{integrate_simpson, integrate_trapezoid, nearest_index, simpson_intervals};

/// Convert a comoving radius in Mpc to the volume of the enclosed sphere in Gpc^3
pub fn sphere_volume_gpc3(radius_mpc: f64) -> f64 {
    (4.0 / 3.0) * std::f64::consts::PI * radius_mpc.powi(3) / constants::MPC3_PER_GPC3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_volume() {
        // A sphere of radius 1000 Mpc holds 4/3 pi Gpc^3
        assert_relative_eq!(
            sphere_volume_gpc3(1000.0),
            4.0 / 3.0 * std::f64::consts::PI,
            epsilon = 1e-12
        );
    }
}
