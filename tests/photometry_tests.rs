/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use qso_cosmo::cosmology::{CosmologyParameters, DistanceCalculator};
use qso_cosmo::photometry::{
    absolute_magnitude, compute_catalog_magnitudes, AbsoluteMagnitudeCalculator,
    KCorrectionTable, MagnitudeConfig, ObjectPhotometry, PhotometryError, BAD_REDSHIFT_SENTINEL,
};
use rstest::rstest;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

/// Test helper to write a k-correction table into a temporary directory
fn create_test_table(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("k_corr_tab.dat");
    let mut file = File::create(&file_path).unwrap();
    write!(file, "{}", content).unwrap();
    (dir, file_path)
}

const SAMPLE_TABLE: &str = "\
0.0,0.613
0.5,0.412
1.0,0.236
1.5,0.114
2.0,0.0
2.5,-0.098
3.0,-0.183
";

#[test]
fn test_load_table_from_file() {
    let (_dir, path) = create_test_table(SAMPLE_TABLE);
    let table = KCorrectionTable::from_path(&path).unwrap();

    assert_eq!(table.len(), 7);
    assert_eq!(table.iter().next(), Some((0.0, 0.613)));
}

#[test]
fn test_missing_table_file() {
    let dir = tempdir().unwrap();
    let result = KCorrectionTable::from_path(dir.path().join("missing.dat"));
    assert!(matches!(result, Err(PhotometryError::TableLoadError(_))));
}

#[test]
fn test_malformed_table_file() {
    let (_dir, path) = create_test_table("0.0,0.613\n0.5;0.412\n");
    let error = KCorrectionTable::from_path(&path).unwrap_err();
    match error {
        PhotometryError::TableLoadError(message) => assert!(message.contains("line 2")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_lookup_exact_at_tabulated_redshifts() {
    let (_dir, path) = create_test_table(SAMPLE_TABLE);
    let table = KCorrectionTable::from_path(&path).unwrap();

    for (z, correction) in table.iter() {
        assert_eq!(table.lookup(z).unwrap(), correction);
    }
}

#[rstest]
#[case(0.24, 0.613)]
#[case(0.26, 0.412)]
#[case(0.25, 0.613)]
#[case(2.1, 0.0)]
#[case(9.0, -0.183)]
fn test_lookup_nearest_neighbour(#[case] z: f64, #[case] expected: f64) {
    let (_dir, path) = create_test_table(SAMPLE_TABLE);
    let table = KCorrectionTable::from_path(&path).unwrap();
    assert_eq!(table.lookup(z).unwrap(), expected);
}

#[rstest]
#[case(0.0)]
#[case(1.7)]
#[case(-12.5)]
fn test_subtraction_chain_invariance(#[case] shift: f64) {
    let base = absolute_magnitude(20.56, 0.045, 46.43, 0.0);
    let shifted = absolute_magnitude(20.56 + shift, 0.045, 46.43 + shift, 0.0);
    assert_relative_eq!(base, shifted, epsilon = 1e-10);
}

#[test]
fn test_end_to_end_quasar() {
    let params = CosmologyParameters::flat(69.6, 0.286, 9.0e-5).unwrap();
    assert_relative_eq!(params.omega_lambda(), 0.7139, epsilon = 1e-4);

    let distances = DistanceCalculator::new(params);
    let table = KCorrectionTable::from_pairs(vec![(1.0, 0.25), (2.0, 0.0), (3.0, -0.2)]).unwrap();
    let calculator = AbsoluteMagnitudeCalculator::new(distances, table, MagnitudeConfig::default());
    let object = ObjectPhotometry::new(20.56, 0.045, 2.355);

    let comoving = calculator.distances().comoving_distance(2.355).unwrap();
    assert!(comoving > 5000.0 && comoving < 6500.0, "D_C = {}", comoving);

    let magnitude = calculator.compute(&object).unwrap();
    assert!(magnitude.is_finite());
    assert!((-30.0..=-20.0).contains(&magnitude), "M_i = {}", magnitude);
    assert_relative_eq!(magnitude, -25.9154, epsilon = 1e-4);
}

#[test]
fn test_invalid_redshift_object() {
    let distances = DistanceCalculator::new(CosmologyParameters::dr15q());
    let table = KCorrectionTable::from_pairs(vec![(2.0, 0.0)]).unwrap();
    let calculator = AbsoluteMagnitudeCalculator::new(distances, table, MagnitudeConfig::default());

    let error = calculator
        .compute(&ObjectPhotometry::new(19.0, 0.02, -0.5))
        .unwrap_err();
    assert!(error.is_invalid_redshift());
}

#[test]
fn test_catalog_run() {
    let distances = DistanceCalculator::new(CosmologyParameters::dr15q());
    let table = KCorrectionTable::from_pairs(vec![(2.0, 0.0)]).unwrap();
    let calculator = AbsoluteMagnitudeCalculator::new(distances, table, MagnitudeConfig::default());

    let records: Vec<ObjectPhotometry> = (0..32)
        .map(|i| {
            let z = if i % 8 == 0 { -1.0 } else { 0.5 + i as f64 * 0.1 };
            ObjectPhotometry::new(19.0 + i as f64 * 0.05, 0.03, z)
        })
        .collect();

    let result = compute_catalog_magnitudes(&records, &calculator, BAD_REDSHIFT_SENTINEL).unwrap();

    assert_eq!(result.magnitudes.len(), records.len());
    assert_eq!(result.skipped, 4);
    assert_eq!(result.computed, 28);
    for (record, magnitude) in records.iter().zip(&result.magnitudes) {
        if record.redshift < 0.0 {
            assert_eq!(*magnitude, BAD_REDSHIFT_SENTINEL);
        } else {
            assert_eq!(*magnitude, calculator.compute(record).unwrap());
        }
    }
}
