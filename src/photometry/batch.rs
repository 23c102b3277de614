/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Absolute magnitudes for a whole catalog
//!
//! Records are independent, so they are processed in parallel with the
//! calculator shared read-only between workers.

use super::errors::Result;
use super::magnitude::{AbsoluteMagnitudeCalculator, ObjectPhotometry};
use crate::cosmology::CosmologyError;
use log::{debug, info, warn};
use rayon::prelude::*;

/// Magnitude written for records whose redshift is out of domain (blazars and
/// objects without a usable redshift)
pub const BAD_REDSHIFT_SENTINEL: f64 = 0.0;

/// Result of a catalog run
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMagnitudes {
    /// One value per input record, in input order
    pub magnitudes: Vec<f64>,
    /// Records with a computed magnitude
    pub computed: usize,
    /// Records that received the sentinel
    pub skipped: usize,
}

/// Compute absolute magnitudes for every record
///
/// Records with an invalid redshift receive `sentinel`; any other failure
/// aborts the run. With a fixed normalisation redshift the distance modulus
/// is integrated once and shared by all records.
pub fn compute_catalog_magnitudes(
    records: &[ObjectPhotometry],
    calculator: &AbsoluteMagnitudeCalculator,
    sentinel: f64,
) -> Result<CatalogMagnitudes> {
    info!(
        "Computing absolute magnitudes for {} records",
        records.len()
    );

    let shared_modulus = match calculator.config().normalize_to_fixed_z {
        Some(z) => match calculator.distances().distance_modulus(z) {
            Ok(modulus) => Some(modulus),
            // Undefined at the fixed redshift; records take the sentinel
            Err(CosmologyError::InvalidRedshift(_)) => {
                warn!(
                    "Distance modulus undefined at fixed redshift {}, computing per record",
                    z
                );
                None
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    let results = records
        .par_iter()
        .enumerate()
        .map(|(i, record)| {
            let result = match shared_modulus {
                Some(modulus) => calculator.compute_with_modulus(record, modulus),
                None => calculator.compute(record),
            };
            match result {
                Ok(magnitude) => Ok(Some(magnitude)),
                Err(e) if e.is_invalid_redshift() => {
                    debug!("Record {}: {}", i, e);
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        })
        .collect::<Result<Vec<Option<f64>>>>()?;

    let skipped = results.iter().filter(|m| m.is_none()).count();
    let magnitudes: Vec<f64> = results
        .into_iter()
        .map(|m| m.unwrap_or(sentinel))
        .collect();

    if skipped > 0 {
        warn!(
            "{} of {} records had an invalid redshift and were set to {}",
            skipped,
            magnitudes.len(),
            sentinel
        );
    }
    info!("Absolute magnitudes calculated");

    Ok(CatalogMagnitudes {
        computed: magnitudes.len() - skipped,
        skipped,
        magnitudes,
    })
}
