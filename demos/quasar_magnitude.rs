/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Example absolute magnitude calculation
//!
//! This example computes distances and the absolute i-band magnitude of a
//! quasar at z = 2.355, then processes a small catalog in parallel.

use qso_cosmo::cosmology::{CosmologyParameters, DistanceCalculator, RedshiftReport};
use qso_cosmo::photometry::{
    compute_catalog_magnitudes, AbsoluteMagnitudeCalculator, KCorrectionTable, MagnitudeConfig,
    ObjectPhotometry, BAD_REDSHIFT_SENTINEL,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Quasar absolute magnitude example");

    let params = CosmologyParameters::flat(69.6, 0.286, 9.0e-5)?;
    let distances = DistanceCalculator::new(params);

    // Ned Wright style summary
    println!("{}", RedshiftReport::compute(&distances, 2.355)?);

    // Coarse i-band k-correction table
    let table = KCorrectionTable::from_pairs(vec![
        (0.0, 0.613),
        (0.5, 0.412),
        (1.0, 0.236),
        (1.5, 0.114),
        (2.0, 0.0),
        (2.5, -0.098),
        (3.0, -0.183),
    ])?;

    let calculator = AbsoluteMagnitudeCalculator::new(distances, table, MagnitudeConfig::default());

    let quasar = ObjectPhotometry::new(20.56, 0.045, 2.355);
    let summary = calculator.summarize(&quasar)?;
    println!(
        "z = {:.4}: D_C = {:.1} Mpc, D_L = {:.1} Mpc, M_i = {:.4}",
        summary.redshift,
        summary.comoving_mpc,
        summary.luminosity_mpc,
        summary.absolute_magnitude
    );

    let catalog = vec![
        ObjectPhotometry::new(19.2, 0.031, 1.12),
        ObjectPhotometry::new(20.1, 0.052, -1.0),
        ObjectPhotometry::new(18.7, 0.027, 0.48),
        ObjectPhotometry::new(20.9, 0.040, 3.05),
    ];
    let result = compute_catalog_magnitudes(&catalog, &calculator, BAD_REDSHIFT_SENTINEL)?;

    println!("\nCatalog ({} computed, {} skipped):", result.computed, result.skipped);
    for (object, magnitude) in catalog.iter().zip(&result.magnitudes) {
        println!("  z = {:6.3}  M_i = {:9.4}", object.redshift, magnitude);
    }

    Ok(())
}
