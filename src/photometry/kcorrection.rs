/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Tabulated i-band k-corrections
//!
//! The table maps redshift to a magnitude correction and is read from a
//! two-column text file, one `redshift,correction` row per line. Blank lines
//! and lines starting with `#` are ignored; whitespace-separated rows are also
//! accepted.
//!
//! Lookups return the correction of the nearest tabulated redshift. There is
//! no interpolation between rows.

use super::errors::{PhotometryError, Result};
use crate::cosmology::CosmologyError;
use crate::utils::nearest_index;
use log::info;
use ndarray::Array1;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Redshift to k-correction table with nearest-neighbour lookup
#[derive(Debug, Clone, PartialEq)]
pub struct KCorrectionTable {
    redshifts: Array1<f64>,
    corrections: Array1<f64>,
}

impl KCorrectionTable {
    /// Build a table from `(redshift, correction)` pairs, keeping their order
    pub fn from_pairs(pairs: Vec<(f64, f64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(PhotometryError::TableLoadError(
                "table has no rows".to_string(),
            ));
        }

        if let Some((z, k)) = pairs
            .iter()
            .find(|(z, k)| !z.is_finite() || !k.is_finite())
        {
            return Err(PhotometryError::TableLoadError(format!(
                "non-finite row ({}, {})",
                z, k
            )));
        }

        let (redshifts, corrections): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Ok(Self {
            redshifts: Array1::from_vec(redshifts),
            corrections: Array1::from_vec(corrections),
        })
    }

    /// Load a table from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PhotometryError::TableLoadError(format!("{}: {}", path.display(), e))
        })?;

        let table = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            PhotometryError::TableLoadError(msg) => {
                PhotometryError::TableLoadError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!(
            "Loaded {} k-correction rows from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a table from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut pairs = Vec::new();

        for (i, line_result) in reader.lines().enumerate() {
            let line_number = i + 1;
            let line = line_result.map_err(|e| {
                PhotometryError::TableLoadError(format!("line {}: {}", line_number, e))
            })?;
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = if trimmed.contains(',') {
                trimmed.split(',').map(str::trim).collect()
            } else {
                trimmed.split_whitespace().collect()
            };

            if fields.len() != 2 {
                return Err(PhotometryError::TableLoadError(format!(
                    "line {}: expected 2 columns, found {}",
                    line_number,
                    fields.len()
                )));
            }

            let parse = |field: &str| {
                field.parse::<f64>().map_err(|_| {
                    PhotometryError::TableLoadError(format!(
                        "line {}: invalid number '{}'",
                        line_number, field
                    ))
                })
            };

            pairs.push((parse(fields[0])?, parse(fields[1])?));
        }

        Self::from_pairs(pairs)
    }

    /// Correction of the tabulated redshift closest to `z`
    ///
    /// When two rows are equally close, the one that comes first in the
    /// table wins.
    pub fn lookup(&self, z: f64) -> Result<f64> {
        if !z.is_finite() {
            return Err(CosmologyError::InvalidRedshift(z).into());
        }

        nearest_index(z, self.redshifts.iter().copied())
            .map(|i| self.corrections[i])
            .ok_or_else(|| CosmologyError::InvalidRedshift(z).into())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.redshifts.len()
    }

    /// Always false for a successfully built table
    pub fn is_empty(&self) -> bool {
        self.redshifts.is_empty()
    }

    /// Rows in table order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.redshifts
            .iter()
            .copied()
            .zip(self.corrections.iter().copied())
    }
}
