/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical and numerical constants used by the cosmology calculations

/// Speed of light in km/s
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Converts (km/s)^-1 Mpc into Gyr, scaled by c
///
/// A lookback integral over c / H(z) is in Mpc; multiplying by this and
/// dividing by c yields Gyr.
pub const GYR_KM_S_PER_MPC: f64 = 978.338_617_6;

/// Redshift of recombination, used as the upper limit for cosmic ages
pub const Z_RECOMBINATION: f64 = 1089.0;

/// Offset of the distance modulus when luminosity distance is in Mpc
pub const DISTANCE_MODULUS_OFFSET: f64 = 25.0;

/// Mpc^3 in one Gpc^3
pub const MPC3_PER_GPC3: f64 = 1.0e9;

/// Default Simpson subintervals for distance integrals
pub const DEFAULT_DISTANCE_STEPS: usize = 100_000;

/// Default Simpson subintervals for lookback-time integrals
pub const DEFAULT_TIME_STEPS: usize = 1_000_000;
