/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use qso_cosmo::lines::{
    identify_pair, observed_wavelength, redshift_from_observed, visible_wavelength,
    EmissionLine, LineError, KNOWN_RATIOS, MAX_PAIR_RATIO,
};
use rstest::rstest;

#[rstest]
#[case("lya", 1215.24)]
#[case("CIV", 1549.48)]
#[case("mgii", 2800.0)]
#[case("hb", 4862.0)]
#[case("oiii", 5008.0)]
fn test_rest_wavelengths(#[case] code: &str, #[case] rest: f64) {
    let line: EmissionLine = code.parse().unwrap();
    assert_eq!(line.rest_wavelength(), rest);
}

#[test]
fn test_redshift_round_trip_through_observed_wavelength() {
    for line in EmissionLine::ALL {
        let observed = observed_wavelength(line, 2.1);
        assert_relative_eq!(
            redshift_from_observed(line, observed).unwrap(),
            2.1,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_lyman_alpha_enters_window_near_z_two() {
    // 3600 / 1215.24 - 1 ≈ 1.962
    assert_eq!(visible_wavelength(EmissionLine::LymanAlpha, 1.9), None);
    assert!(visible_wavelength(EmissionLine::LymanAlpha, 2.0).is_some());
}

#[test]
fn test_pairs_at_common_redshifts() {
    // Rest-frame pairs observed at z = 2.4 resolve to their own entry
    let z = 2.4;
    let civ = observed_wavelength(EmissionLine::CarbonIV, z);
    let ciii = observed_wavelength(EmissionLine::CarbonIII, z);
    let lya = observed_wavelength(EmissionLine::LymanAlpha, z);

    let pair = identify_pair(ciii, civ).unwrap().unwrap();
    assert_eq!(
        (pair.red, pair.blue),
        (EmissionLine::CarbonIII, EmissionLine::CarbonIV)
    );

    let pair = identify_pair(civ, lya).unwrap().unwrap();
    assert_eq!(
        (pair.red, pair.blue),
        (EmissionLine::CarbonIV, EmissionLine::LymanAlpha)
    );
}

#[test]
fn test_every_reachable_known_ratio_is_identified() {
    for known in KNOWN_RATIOS.iter().filter(|k| k.ratio < MAX_PAIR_RATIO) {
        let pair = identify_pair(known.ratio * 1000.0, 1000.0).unwrap().unwrap();
        assert_eq!(pair.known_ratio, known.ratio);
        assert_eq!((pair.red, pair.blue), (known.red, known.blue));
    }
}

#[test]
fn test_line_errors() {
    assert!(matches!(
        "xx".parse::<EmissionLine>(),
        Err(LineError::UnknownLine(_))
    ));
    assert_eq!(
        redshift_from_observed(EmissionLine::HAlpha, -10.0),
        Err(LineError::InvalidWavelength(-10.0))
    );
    assert!(identify_pair(f64::INFINITY, 1000.0).is_err());
}
