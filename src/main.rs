/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for qso-cosmo

use clap::Parser;
use qso_cosmo::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("qso-cosmo v{}", qso_cosmo::VERSION);

    cli::run(cli)
}
