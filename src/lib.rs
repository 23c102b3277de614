/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # qso-cosmo
//!
//! Cosmological distance and absolute-magnitude calculations for SDSS quasar
//! catalogs.
//!
//! The core is a flat ΛCDM distance engine: the expansion-rate integrand is
//! integrated with a fixed-step Simpson rule to give comoving, luminosity and
//! angular-diameter distances, the distance modulus and lookback times. A
//! nearest-neighbour k-correction table and the object's photometry turn the
//! distance modulus into an absolute i-band magnitude.
//!
//! ```no_run
//! use qso_cosmo::cosmology::{CosmologyParameters, DistanceCalculator};
//! use qso_cosmo::photometry::{
//!     AbsoluteMagnitudeCalculator, KCorrectionTable, MagnitudeConfig, ObjectPhotometry,
//! };
//!
//! let distances = DistanceCalculator::new(CosmologyParameters::dr15q());
//! let table = KCorrectionTable::from_path("k_corr_tab.dat")?;
//! let calculator = AbsoluteMagnitudeCalculator::new(distances, table, MagnitudeConfig::default());
//!
//! let magnitude = calculator.compute(&ObjectPhotometry::new(20.56, 0.045, 2.355))?;
//! println!("M_i = {:.3}", magnitude);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod cosmology;
pub mod lines;
pub mod photometry;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
