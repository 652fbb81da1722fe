//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use pv_calc::model::{ConsumptionMode, Estimator, Inputs};

/// Estimator over the compile-time tariff.
pub fn default_estimator() -> Estimator {
    Estimator::default()
}

/// Inputs for a monthly bill of `value` € in `region`.
pub fn bill_inputs(region: &str, value: f64) -> Inputs {
    Inputs {
        mode: ConsumptionMode::MonthlyCurrency,
        value,
        region: region.to_string(),
        ..Inputs::default()
    }
}

/// Inputs for a monthly consumption of `value` kWh in `region`.
pub fn kwh_inputs(region: &str, value: f64) -> Inputs {
    Inputs {
        mode: ConsumptionMode::MonthlyKWh,
        value,
        region: region.to_string(),
        ..Inputs::default()
    }
}

/// Annual consumption sweep from 0 to 30 000 kWh, including the
/// ratio-floor crossover region.
pub fn consumption_sweep() -> Vec<f64> {
    let mut values: Vec<f64> = (0..=300u32).map(|i| f64::from(i) * 100.0).collect();
    values.extend([0.001, 1.0, 1291.6, 1458.3, 1500.0, 1458.4]);
    values
}

/// Asserts `a` and `b` differ by less than `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "expected {b}, got {a} (tol {tol})");
}
