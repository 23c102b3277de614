/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Line-pair identification from the ratio of two observed line centres
//!
//! The ratio of two observed wavelengths does not depend on redshift, so it
//! identifies the pair directly. The redder line is always the numerator.

use super::errors::{LineError, Result};
use super::EmissionLine;
use crate::utils::nearest_index;
use log::debug;

/// Ratios at or above this value are never matched
pub const MAX_PAIR_RATIO: f64 = 2.5;

/// Largest accepted difference from a known ratio
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Known wavelength ratio of a red/blue line pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownRatio {
    pub red: EmissionLine,
    pub blue: EmissionLine,
    pub ratio: f64,
}

const fn known(red: EmissionLine, blue: EmissionLine, ratio: f64) -> KnownRatio {
    KnownRatio { red, blue, ratio }
}

/// Empirical ratios of commonly paired quasar lines
pub const KNOWN_RATIOS: [KnownRatio; 17] = [
    known(EmissionLine::MagnesiumII, EmissionLine::CarbonIII, 1.4675),
    known(EmissionLine::MagnesiumII, EmissionLine::CarbonIV, 1.806),
    known(EmissionLine::MagnesiumII, EmissionLine::SiliconOxygenIV, 2.00),
    known(EmissionLine::MagnesiumII, EmissionLine::LymanAlpha, 2.3026),
    known(EmissionLine::CarbonIII, EmissionLine::CarbonIV, 1.23097),
    known(EmissionLine::CarbonIII, EmissionLine::SiliconOxygenIV, 1.36286),
    known(EmissionLine::CarbonIII, EmissionLine::LymanAlpha, 1.56908),
    known(EmissionLine::CarbonIV, EmissionLine::SiliconOxygenIV, 1.10714),
    known(EmissionLine::CarbonIV, EmissionLine::LymanAlpha, 1.27467),
    known(EmissionLine::OxygenIII, EmissionLine::MagnesiumII, 1.78857),
    known(EmissionLine::OxygenIII, EmissionLine::CarbonIII, 2.6237),
    known(EmissionLine::OxygenIII, EmissionLine::HGamma, 1.1535),
    known(EmissionLine::HBeta, EmissionLine::MagnesiumII, 1.7364),
    known(EmissionLine::HBeta, EmissionLine::CarbonIII, 2.547),
    known(EmissionLine::HBeta, EmissionLine::HGamma, 1.1198),
    known(EmissionLine::HGamma, EmissionLine::MagnesiumII, 1.5506),
    known(EmissionLine::HGamma, EmissionLine::CarbonIII, 2.2746),
];

/// A recognised line pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePairMatch {
    pub red: EmissionLine,
    pub blue: EmissionLine,
    /// Ratio of the observed centres
    pub ratio: f64,
    /// Closest known ratio
    pub known_ratio: f64,
    /// Absolute difference between the two
    pub difference: f64,
}

/// Identify the line pair for a red and a blue observed line centre
///
/// # Returns
///
/// The closest known pair, or `None` when the ratio is at least
/// [`MAX_PAIR_RATIO`] or no known ratio lies within [`RATIO_TOLERANCE`]
pub fn identify_pair(red_center: f64, blue_center: f64) -> Result<Option<LinePairMatch>> {
    for center in [red_center, blue_center] {
        if !center.is_finite() || center <= 0.0 {
            return Err(LineError::InvalidWavelength(center));
        }
    }

    let ratio = red_center / blue_center;
    let closest = match nearest_index(ratio, KNOWN_RATIOS.iter().map(|k| k.ratio)) {
        Some(i) => KNOWN_RATIOS[i],
        None => return Ok(None),
    };
    let difference = (ratio - closest.ratio).abs();

    if ratio >= MAX_PAIR_RATIO || difference > RATIO_TOLERANCE {
        debug!(
            "Ratio {:.4} not recognised (closest {} / {} differs by {:.4})",
            ratio, closest.red, closest.blue, difference
        );
        return Ok(None);
    }

    Ok(Some(LinePairMatch {
        red: closest.red,
        blue: closest.blue,
        ratio,
        known_ratio: closest.ratio,
        difference,
    }))
}
