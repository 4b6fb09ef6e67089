use approx::assert_relative_eq;
use proptest::prelude::*;
use spc_capability::CapabilityAnalyzer;
use spc_control::{ControlLimitCalculator, LimitCalculator};
use spc_core::{subgroups_from_rows, MeasurementSpec};

fn spread_rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..=10, 2usize..25).prop_flat_map(|(n, k)| {
        prop::collection::vec(prop::collection::vec(9.0f64..11.0, n), k)
    })
    .prop_filter("needs within-subgroup spread", |rows| {
        rows.iter().any(|row| row.iter().any(|v| (v - row[0]).abs() > 1e-6))
    })
}

proptest! {
    #[test]
    fn prop_cpk_never_exceeds_cp(rows in spread_rows(), nominal in 9.5f64..10.5) {
        let spec = MeasurementSpec::symmetric(nominal, 0.5, "mm").unwrap();
        let subgroups = subgroups_from_rows(rows);
        let limits = ControlLimitCalculator::new().compute_limits(&subgroups).unwrap();
        let c = CapabilityAnalyzer::new().analyze(&subgroups, &limits, &spec).unwrap();

        prop_assert!(c.cpk <= c.cp + 1e-9);
        prop_assert!(c.ppk <= c.pp + 1e-9);
        prop_assert!(c.sigma_short_term > 0.0);
        prop_assert!(c.overall_std_dev > 0.0);
    }
}

#[test]
fn test_centered_process_has_equal_cp_and_cpk() {
    let spec = MeasurementSpec::symmetric(25.0, 1.0, "mm").unwrap();
    let subgroups = subgroups_from_rows(vec![
        vec![24.8, 25.0, 25.2],
        vec![25.2, 25.0, 24.8],
        vec![24.9, 25.0, 25.1],
        vec![25.1, 25.0, 24.9],
    ]);
    let limits = ControlLimitCalculator::new().compute_limits(&subgroups).unwrap();
    let c = CapabilityAnalyzer::new().analyze(&subgroups, &limits, &spec).unwrap();

    assert_relative_eq!(c.center, 25.0, epsilon = 1e-9);
    assert_relative_eq!(c.cp, c.cpk, epsilon = 1e-9);
    assert_relative_eq!(c.pp, c.ppk, epsilon = 1e-9);
}

#[test]
fn test_asymmetric_tolerance_shifts_cpk() {
    // usl = 10.1, lsl = 9.5
    let spec = MeasurementSpec::new(10.0, 0.1, 0.5, "mm").unwrap();
    let subgroups = subgroups_from_rows(vec![
        vec![9.95, 10.0, 10.05],
        vec![10.05, 10.0, 9.95],
    ]);
    let limits = ControlLimitCalculator::new().compute_limits(&subgroups).unwrap();
    let c = CapabilityAnalyzer::new().analyze(&subgroups, &limits, &spec).unwrap();

    assert!(c.cp_upper < c.cp_lower);
    assert_relative_eq!(c.cpk, c.cp_upper, epsilon = 1e-12);
}
