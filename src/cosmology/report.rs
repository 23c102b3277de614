/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Summary of ages and distances for a single redshift, in the layout of
//! Ned Wright's cosmology calculator

use super::distance::DistanceCalculator;
use super::errors::Result;
use super::parameters::CosmologyParameters;
use serde::Serialize;
use std::fmt;

/// Ages, distances and volume for one redshift
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RedshiftReport {
    pub redshift: f64,
    pub parameters: CosmologyParameters,
    /// Present age of the universe in Gyr
    pub age_of_universe_gyr: f64,
    /// Age of the universe at the redshift in Gyr
    pub age_at_redshift_gyr: f64,
    /// Light-travel time in Gyr
    pub light_travel_time_gyr: f64,
    pub comoving_distance_mpc: f64,
    /// Comoving volume in Gpc^3
    pub comoving_volume_gpc3: f64,
    pub angular_size_distance_mpc: f64,
    pub luminosity_distance_mpc: f64,
}

impl RedshiftReport {
    /// Compute the report for redshift `z`
    pub fn compute(calculator: &DistanceCalculator, z: f64) -> Result<Self> {
        let distances = calculator.distances(z)?;

        Ok(Self {
            redshift: z,
            parameters: *calculator.parameters(),
            age_of_universe_gyr: calculator.age_of_universe()?,
            age_at_redshift_gyr: calculator.age_at(z)?,
            light_travel_time_gyr: calculator.light_travel_time(z)?,
            comoving_distance_mpc: distances.comoving_mpc,
            comoving_volume_gpc3: calculator.comoving_volume(z)?,
            angular_size_distance_mpc: distances.angular_diameter_mpc,
            luminosity_distance_mpc: distances.luminosity_mpc,
        })
    }
}

impl fmt::Display for RedshiftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Redshift: {}, Wm: {}, Wr: {}, Wl: {:0.3}, H0: {}",
            self.redshift,
            self.parameters.omega_m(),
            self.parameters.omega_r(),
            self.parameters.omega_lambda(),
            self.parameters.h0()
        )?;
        writeln!(f, "{}", "-".repeat(57))?;
        writeln!(f, "Age of Universe:   {:7.1} Gyr", self.age_of_universe_gyr)?;
        writeln!(f, "Age at Redshift:   {:7.1} Gyr", self.age_at_redshift_gyr)?;
        writeln!(f, "Light Travel Time: {:7.1} Gyr", self.light_travel_time_gyr)?;
        writeln!(f, "Comoving Distance: {:7.1} Mpc", self.comoving_distance_mpc)?;
        writeln!(f, "Comoving Volume:   {:7.2} Gpc^3", self.comoving_volume_gpc3)?;
        writeln!(f, "Angular Size Dist: {:7.1} Mpc", self.angular_size_distance_mpc)?;
        write!(f, "Luminosity Dist:   {:7.1} Mpc", self.luminosity_distance_mpc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::IntegrationSettings;

    #[test]
    fn test_report_layout() {
        let calc = DistanceCalculator::with_settings(
            CosmologyParameters::dr15q(),
            IntegrationSettings {
                distance_steps: 1_000,
                time_steps: 10_000,
            },
        );
        let report = RedshiftReport::compute(&calc, 1.0).unwrap();
        let text = report.to_string();

        assert!(text.starts_with("Redshift: 1, Wm: 0.286, Wr: 0.00009, Wl: 0.714, H0: 69.6"));
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("Comoving Volume:"));
        assert!(report.age_at_redshift_gyr < report.age_of_universe_gyr);
        assert!(report.luminosity_distance_mpc > report.comoving_distance_mpc);
    }
}
