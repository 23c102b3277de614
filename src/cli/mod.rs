/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides the `qso-cosmo` command-line interface: redshift
//! reports, single-object absolute magnitudes and the emission-line helpers.

use crate::config::{validate_magnitude, PipelineConfig};
use crate::cosmology::RedshiftReport;
use crate::lines::{self, EmissionLine};
use crate::photometry::{
    AbsoluteMagnitudeCalculator, KCorrectionTable, MagnitudeConfig, ObjectPhotometry,
};
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qso-cosmo")]
#[command(about = "Cosmological distances and absolute magnitudes for quasar catalogs")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Hubble constant in km/s/Mpc
    #[arg(long, global = true)]
    pub h0: Option<f64>,

    /// Matter density parameter
    #[arg(long, global = true)]
    pub omega_m: Option<f64>,

    /// Radiation density parameter
    #[arg(long, global = true)]
    pub omega_r: Option<f64>,

    /// Simpson subintervals for distance integrals
    #[arg(long, global = true)]
    pub distance_steps: Option<usize>,

    /// Simpson subintervals for lookback-time integrals
    #[arg(long, global = true)]
    pub time_steps: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ages, distances and volume for a redshift
    Report(ReportArgs),

    /// Absolute i-band magnitude of one object
    Magnitude(MagnitudeArgs),

    /// Emission-line redshift helpers
    #[command(subcommand)]
    Line(LineCommands),
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Redshift of the object
    #[arg(allow_negative_numbers = true)]
    pub redshift: f64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct MagnitudeArgs {
    /// Redshift of the object
    #[arg(long, allow_negative_numbers = true)]
    pub redshift: f64,

    /// Apparent i-band magnitude
    #[arg(long)]
    pub apparent: f64,

    /// i-band galactic extinction in magnitudes
    #[arg(long, default_value = "0.0")]
    pub extinction: f64,

    /// K-correction table (overrides the configuration file)
    #[arg(long)]
    pub kcorr_table: Option<PathBuf>,

    /// Look up the k-correction at this fixed redshift
    #[arg(long, conflicts_with = "kcorr_own_z")]
    pub kcorr_z: Option<f64>,

    /// Look up the k-correction at the object's own redshift
    #[arg(long)]
    pub kcorr_own_z: bool,

    /// Compute the distance modulus at this fixed redshift
    #[arg(long)]
    pub normalize_z: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum LineCommands {
    /// Redshift from a line's observed centre
    Redshift {
        /// Line code, e.g. lya, civ, mgii
        line: EmissionLine,
        /// Observed centre in Å
        observed: f64,
    },

    /// Where a line appears at a trial redshift
    Observed {
        /// Line code, e.g. lya, civ, mgii
        line: EmissionLine,
        /// Trial redshift
        #[arg(allow_negative_numbers = true)]
        redshift: f64,
    },

    /// Identify a line pair from two observed centres
    Ratio {
        /// Centre of the redder line in Å
        red: f64,
        /// Centre of the bluer line in Å
        blue: f64,
    },
}

/// Run the parsed command
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;

    match &cli.command {
        Commands::Report(args) => run_report(&config, args),
        Commands::Magnitude(args) => run_magnitude(&config, args),
        Commands::Line(command) => run_line(command),
    }
}

/// Merge the configuration file with command-line overrides
pub fn resolve_config(cli: &Cli) -> anyhow::Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(h0) = cli.h0 {
        config.cosmology.h0 = h0;
    }
    if let Some(omega_m) = cli.omega_m {
        config.cosmology.omega_m = omega_m;
    }
    if let Some(omega_r) = cli.omega_r {
        config.cosmology.omega_r = omega_r;
    }
    if let Some(steps) = cli.distance_steps {
        config.integration.distance_steps = steps;
    }
    if let Some(steps) = cli.time_steps {
        config.integration.time_steps = steps;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run_report(config: &PipelineConfig, args: &ReportArgs) -> anyhow::Result<()> {
    let calculator = config.distance_calculator()?;
    let report = RedshiftReport::compute(&calculator, args.redshift)
        .with_context(|| format!("Cannot report on redshift {}", args.redshift))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn run_magnitude(config: &PipelineConfig, args: &MagnitudeArgs) -> anyhow::Result<()> {
    let magnitude_config = magnitude_modes(config, args)?;
    info!("Magnitude redshift modes: {:?}", magnitude_config);

    let table_path = match args.kcorr_table.as_ref().or(config.kcorrection_table.as_ref()) {
        Some(path) => path,
        None => bail!(
            "No k-correction table given; pass --kcorr-table or set kcorrection_table in the configuration"
        ),
    };
    let table = KCorrectionTable::from_path(table_path)?;

    let calculator =
        AbsoluteMagnitudeCalculator::new(config.distance_calculator()?, table, magnitude_config);
    let object = ObjectPhotometry::new(args.apparent, args.extinction, args.redshift);
    let summary = calculator
        .summarize(&object)
        .with_context(|| format!("Cannot compute a magnitude at redshift {}", args.redshift))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("   Z   |    Dp      |     Dl     |    Mag");
        println!("{}", "-".repeat(44));
        println!(
            "{:6.4} | {:6.1} Mpc | {:7.1} Mpc| {:9.5}",
            summary.redshift,
            summary.comoving_mpc,
            summary.luminosity_mpc,
            summary.absolute_magnitude
        );
    }
    Ok(())
}

/// Apply the magnitude flags on top of the configured redshift modes
fn magnitude_modes(
    config: &PipelineConfig,
    args: &MagnitudeArgs,
) -> anyhow::Result<MagnitudeConfig> {
    let mut modes = config.magnitude;
    if args.kcorr_own_z {
        modes.kcorrection_fixed_z = None;
    }
    if let Some(z) = args.kcorr_z {
        modes.kcorrection_fixed_z = Some(z);
    }
    if let Some(z) = args.normalize_z {
        modes.normalize_to_fixed_z = Some(z);
    }

    validate_magnitude(&modes).context("Invalid --normalize-z or --kcorr-z")?;
    Ok(modes)
}

fn run_line(command: &LineCommands) -> anyhow::Result<()> {
    match command {
        LineCommands::Redshift { line, observed } => {
            let z = lines::redshift_from_observed(*line, *observed)?;
            println!("Line: {}", line);
            println!("Redshift: {:07.5}", z);
        }
        LineCommands::Observed { line, redshift } => {
            println!("Line: {}", line);
            println!("Redshift: {:07.5}", redshift);
            match lines::visible_wavelength(*line, *redshift) {
                Some(observed) => println!("L_Obs: {} ang", observed.trunc()),
                None => println!("L_Obs: Out of Range"),
            }
        }
        LineCommands::Ratio { red, blue } => match lines::identify_pair(*red, *blue)? {
            Some(pair) => {
                println!("Red: {}, Blue: {}", pair.red, pair.blue);
                println!("R = {:.4}, |dR| = {:.4}", pair.ratio, pair.difference);
            }
            None => {
                println!("Calculated ratio: R = {:.4}", red / blue);
                println!("Not a recognized pair, try a different pair.");
            }
        },
    }
    Ok(())
}
