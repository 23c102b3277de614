/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Emission-line redshift calculator
//!
//! Helpers used during visual inspection of quasar spectra: the redshift
//! implied by an observed line centre, where a line should appear at a trial
//! redshift, and which line pair two observed centres most likely belong to.
//! Rest wavelengths are in Ångström and follow the SDSS line table.

mod errors;
mod ratio;

pub use errors::{LineError, Result};
pub use ratio::{
    identify_pair, KnownRatio, LinePairMatch, KNOWN_RATIOS, MAX_PAIR_RATIO, RATIO_TOLERANCE,
};

use std::fmt;
use std::str::FromStr;

/// Bluest wavelength recorded by the spectrograph, in Å
pub const MIN_OBSERVED_WAVELENGTH: f64 = 3600.0;

/// Reddest wavelength recorded by the spectrograph, in Å
pub const MAX_OBSERVED_WAVELENGTH: f64 = 9800.0;

/// Emission lines common in quasar spectra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmissionLine {
    LymanBeta,
    LymanAlpha,
    /// Blend of Si IV and O IV]
    SiliconOxygenIV,
    CarbonIV,
    HeliumII,
    CarbonIII,
    CarbonII,
    MagnesiumII,
    OxygenII,
    HDelta,
    HGamma,
    HBeta,
    OxygenIII,
    HAlpha,
}

impl EmissionLine {
    /// All lines, blue to red
    pub const ALL: [EmissionLine; 14] = [
        EmissionLine::LymanBeta,
        EmissionLine::LymanAlpha,
        EmissionLine::SiliconOxygenIV,
        EmissionLine::CarbonIV,
        EmissionLine::HeliumII,
        EmissionLine::CarbonIII,
        EmissionLine::CarbonII,
        EmissionLine::MagnesiumII,
        EmissionLine::OxygenII,
        EmissionLine::HDelta,
        EmissionLine::HGamma,
        EmissionLine::HBeta,
        EmissionLine::OxygenIII,
        EmissionLine::HAlpha,
    ];

    /// Rest wavelength in Å
    pub fn rest_wavelength(&self) -> f64 {
        match self {
            EmissionLine::LymanBeta => 1033.0,
            EmissionLine::LymanAlpha => 1215.24,
            EmissionLine::SiliconOxygenIV => 1399.8,
            EmissionLine::CarbonIV => 1549.48,
            EmissionLine::HeliumII => 1640.4,
            EmissionLine::CarbonIII => 1908.734,
            EmissionLine::CarbonII => 2326.0,
            EmissionLine::MagnesiumII => 2800.0,
            EmissionLine::OxygenII => 3728.0,
            EmissionLine::HDelta => 4102.89,
            EmissionLine::HGamma => 4341.68,
            EmissionLine::HBeta => 4862.0,
            EmissionLine::OxygenIII => 5008.0,
            EmissionLine::HAlpha => 6563.0,
        }
    }

    /// Spectroscopic label
    pub fn label(&self) -> &'static str {
        match self {
            EmissionLine::LymanBeta => "Ly b",
            EmissionLine::LymanAlpha => "Ly a",
            EmissionLine::SiliconOxygenIV => "Si IV + O IV",
            EmissionLine::CarbonIV => "C IV",
            EmissionLine::HeliumII => "He II",
            EmissionLine::CarbonIII => "C III",
            EmissionLine::CarbonII => "C II",
            EmissionLine::MagnesiumII => "Mg II",
            EmissionLine::OxygenII => "[O II]",
            EmissionLine::HDelta => "H d",
            EmissionLine::HGamma => "H g",
            EmissionLine::HBeta => "H b",
            EmissionLine::OxygenIII => "[O III]",
            EmissionLine::HAlpha => "H a",
        }
    }
}

impl fmt::Display for EmissionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmissionLine {
    type Err = LineError;

    /// Parse a line code such as `lya`, `civ` or `Mg II`; case and spaces are ignored
    fn from_str(s: &str) -> Result<Self> {
        let code: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        match code.as_str() {
            "LYB" => Ok(EmissionLine::LymanBeta),
            "LYA" => Ok(EmissionLine::LymanAlpha),
            "SIV" | "OIV" | "SIIV" | "SIIV+OIV" | "SIV+OIV" => {
                Ok(EmissionLine::SiliconOxygenIV)
            }
            "CIV" => Ok(EmissionLine::CarbonIV),
            "HEII" => Ok(EmissionLine::HeliumII),
            "CIII" => Ok(EmissionLine::CarbonIII),
            "CII" => Ok(EmissionLine::CarbonII),
            "MGII" => Ok(EmissionLine::MagnesiumII),
            "OII" | "[OII]" => Ok(EmissionLine::OxygenII),
            "HD" => Ok(EmissionLine::HDelta),
            "HG" => Ok(EmissionLine::HGamma),
            "HB" => Ok(EmissionLine::HBeta),
            "OIII" | "[OIII]" => Ok(EmissionLine::OxygenIII),
            "HA" => Ok(EmissionLine::HAlpha),
            _ => Err(LineError::UnknownLine(s.to_string())),
        }
    }
}

/// Redshift implied by observing `line` at `observed` Å
pub fn redshift_from_observed(line: EmissionLine, observed: f64) -> Result<f64> {
    if !observed.is_finite() || observed <= 0.0 {
        return Err(LineError::InvalidWavelength(observed));
    }
    let rest = line.rest_wavelength();
    Ok((observed - rest) / rest)
}

/// Observed wavelength of `line` at redshift `z`, in Å
pub fn observed_wavelength(line: EmissionLine, z: f64) -> f64 {
    line.rest_wavelength() * (1.0 + z)
}

/// Observed wavelength of `line` at `z`, or `None` if it falls outside the
/// spectrograph window
///
/// The window check uses the wavelength truncated to whole Ångström.
pub fn visible_wavelength(line: EmissionLine, z: f64) -> Option<f64> {
    let observed = observed_wavelength(line, z);
    let whole = observed.trunc();
    if (MIN_OBSERVED_WAVELENGTH..=MAX_OBSERVED_WAVELENGTH).contains(&whole) {
        Some(observed)
    } else {
        None
    }
}
