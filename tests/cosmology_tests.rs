/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use qso_cosmo::cosmology::{
    CosmologyError, CosmologyParameters, DistanceCalculator, IntegrationSettings, RedshiftReport,
};
use rstest::rstest;

fn standard_parameters() -> CosmologyParameters {
    CosmologyParameters::flat(69.6, 0.286, 9.0e-5).unwrap()
}

#[test]
fn test_comoving_distance_zero_at_origin() {
    let calc = DistanceCalculator::new(standard_parameters());
    assert_eq!(calc.comoving_distance(0.0).unwrap(), 0.0);
}

#[test]
fn test_comoving_distance_monotonic() {
    let calc = DistanceCalculator::with_settings(
        standard_parameters(),
        IntegrationSettings {
            distance_steps: 10_000,
            time_steps: 10_000,
        },
    );

    let mut previous = 0.0;
    for i in 1..=60 {
        let z = i as f64 * 0.1;
        let distance = calc.comoving_distance(z).unwrap();
        assert!(
            distance >= previous,
            "D_C({}) = {} < {}",
            z,
            distance,
            previous
        );
        previous = distance;
    }
}

#[rstest]
#[case(0.1)]
#[case(1.0)]
#[case(2.355)]
#[case(7.0)]
fn test_luminosity_over_angular_diameter(#[case] z: f64) {
    let calc = DistanceCalculator::new(standard_parameters());
    let result = calc.distances(z).unwrap();
    assert_relative_eq!(
        result.luminosity_mpc / result.angular_diameter_mpc,
        (1.0 + z).powi(2),
        max_relative = 1e-12
    );
}

#[test]
fn test_step_doubling_converges() {
    let params = standard_parameters();
    let coarse = DistanceCalculator::with_settings(
        params,
        IntegrationSettings {
            distance_steps: 100_000,
            time_steps: 1_000_000,
        },
    );
    let fine = DistanceCalculator::with_settings(
        params,
        IntegrationSettings {
            distance_steps: 200_000,
            time_steps: 1_000_000,
        },
    );

    let difference =
        (coarse.comoving_distance(2.0).unwrap() - fine.comoving_distance(2.0).unwrap()).abs();
    assert!(difference < 1e-6, "difference {} Mpc", difference);
}

#[rstest]
#[case(1.0, 3350.5478)]
#[case(2.355, 5759.5373)]
#[case(3.0, 6480.9893)]
fn test_comoving_reference_values(#[case] z: f64, #[case] expected_mpc: f64) {
    let calc = DistanceCalculator::new(standard_parameters());
    assert_relative_eq!(
        calc.comoving_distance(z).unwrap(),
        expected_mpc,
        max_relative = 1e-7
    );
}

#[test]
fn test_simpson_agrees_with_trapezoid() {
    use qso_cosmo::cosmology::CosmologyModel;
    use qso_cosmo::utils::{integrate_simpson, integrate_trapezoid};

    let model = CosmologyModel::new(standard_parameters());
    let f = |z: f64| model.integrand(z).unwrap();
    let simpson = integrate_simpson(f, 0.0, 2.0, 100_000).unwrap();
    let trapezoid = integrate_trapezoid(f, 0.0, 2.0, 100_000);

    // Six significant figures at this step count
    assert_relative_eq!(simpson, trapezoid, max_relative = 1e-6);
}

#[test]
fn test_ages() {
    let calc = DistanceCalculator::new(standard_parameters());

    let age = calc.age_of_universe().unwrap();
    assert!(age > 13.6 && age < 13.85, "age {} Gyr", age);

    let travel = calc.light_travel_time(2.355).unwrap();
    assert_relative_eq!(travel, 10.9109, max_relative = 1e-4);

    let age_then = calc.age_at(2.355).unwrap();
    assert_relative_eq!(age_then + travel, age, max_relative = 1e-6);
}

#[test]
fn test_invalid_redshift() {
    let calc = DistanceCalculator::new(standard_parameters());
    assert_eq!(
        calc.comoving_distance(-0.5),
        Err(CosmologyError::InvalidRedshift(-0.5))
    );
    assert_eq!(
        calc.distance_modulus(-0.5),
        Err(CosmologyError::InvalidRedshift(-0.5))
    );
    assert_eq!(
        calc.distance_modulus(0.0),
        Err(CosmologyError::InvalidRedshift(0.0))
    );
}

#[test]
fn test_redshift_report() {
    let calc = DistanceCalculator::new(standard_parameters());
    let report = RedshiftReport::compute(&calc, 2.355).unwrap();

    assert_relative_eq!(report.comoving_distance_mpc, 5759.5373, max_relative = 1e-7);
    assert_relative_eq!(
        report.luminosity_distance_mpc,
        report.comoving_distance_mpc * 3.355,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        report.comoving_volume_gpc3,
        4.0 / 3.0 * std::f64::consts::PI * report.comoving_distance_mpc.powi(3) / 1.0e9,
        max_relative = 1e-12
    );

    let text = report.to_string();
    assert!(text.contains("Comoving Distance:  5759.5 Mpc"));
}
