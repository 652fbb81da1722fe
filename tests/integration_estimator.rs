//! Integration tests for the estimation pipeline.

mod common;

use common::assert_close;
use pv_calc::error::EstimateError;
use pv_calc::io::export::write_csv;
use pv_calc::model::ConsumptionMode;
use pv_calc::region::REGIONS;

#[test]
fn monthly_kwh_annualizes_by_twelve() {
    let est = common::default_estimator();
    for v in [0.0, 1.0, 250.0, 333.3, 10_000.0] {
        assert_eq!(est.annual_consumption_kwh(ConsumptionMode::MonthlyKWh, v), v * 12.0);
    }
}

#[test]
fn monthly_bill_annualizes_through_price() {
    let est = common::default_estimator();
    for v in [0.0, 1.0, 60.0, 140.0, 999.0] {
        assert_eq!(
            est.annual_consumption_kwh(ConsumptionMode::MonthlyCurrency, v),
            (v / 0.20) * 12.0
        );
    }
}

#[test]
fn cataluna_bill_of_sixty_euros() {
    let est = common::default_estimator();
    let e = est
        .evaluate(&common::bill_inputs("Cataluña", 60.0))
        .expect("valid inputs");

    assert_close(e.annual_consumption_kwh, 3600.0, 1e-9);
    assert_close(e.potential_savings_kwh, 2160.0, 1e-6);
    assert_close(e.installed_kwp, 1.3935, 1e-4);
    assert_close(e.investment_eur, 1672.26, 1e-2);
    assert_close(e.annual_savings_eur, 432.0, 1e-6);
    assert_close(e.payback_years.expect("savings > 0"), 3.87, 1e-2);
    assert_close(e.co2_avoided_kg, 498.96, 1e-6);
}

#[test]
fn unknown_region_produces_no_result() {
    let est = common::default_estimator();
    let result = est.evaluate(&common::bill_inputs("Narnia", 60.0));
    assert!(matches!(result, Err(EstimateError::InvalidInput(_))));
}

#[test]
fn zero_consumption_floors_installation() {
    let est = common::default_estimator();
    for mode_inputs in [
        common::bill_inputs("Andalucía", 0.0),
        common::kwh_inputs("Andalucía", 0.0),
    ] {
        let e = est.evaluate(&mode_inputs).expect("valid inputs");
        assert_eq!(e.annual_consumption_kwh, 0.0);
        assert_eq!(e.potential_savings_kwh, 0.0);
        assert_eq!(e.installed_kwp, 0.5);
        assert_eq!(e.investment_eur, 600.0);
        assert_eq!(e.annual_savings_eur, 0.0);
        assert_eq!(e.payback_years, None);
        assert_eq!(e.co2_avoided_kg, 0.0);
    }
}

#[test]
fn savings_never_exceed_consumption() {
    let est = common::default_estimator();
    for region in &REGIONS {
        for annual in common::consumption_sweep() {
            let e = est.estimate(region.name, annual).expect("region from table");
            assert!(
                e.potential_savings_kwh <= annual,
                "{}: savings {} > consumption {annual}",
                region.name,
                e.potential_savings_kwh
            );
        }
    }
}

#[test]
fn installed_capacity_has_floor() {
    let est = common::default_estimator();
    for region in &REGIONS {
        for annual in common::consumption_sweep() {
            let e = est.estimate(region.name, annual).expect("region from table");
            assert!(e.installed_kwp >= 0.5, "{}: {} kWp", region.name, e.installed_kwp);
        }
    }
}

#[test]
fn payback_absent_exactly_when_no_savings() {
    let est = common::default_estimator();
    for region in &REGIONS {
        for annual in common::consumption_sweep() {
            let e = est.estimate(region.name, annual).expect("region from table");
            assert_eq!(
                e.payback_years.is_none(),
                e.potential_savings_kwh == 0.0,
                "{} at {annual} kWh",
                region.name
            );
        }
    }
}

#[test]
fn repeated_estimates_are_bit_identical() {
    let est = common::default_estimator();
    let inputs = common::kwh_inputs("País Vasco", 287.5);
    let a = est.evaluate(&inputs).expect("valid inputs");
    let b = est.evaluate(&inputs).expect("valid inputs");
    assert_eq!(a.annual_consumption_kwh.to_bits(), b.annual_consumption_kwh.to_bits());
    assert_eq!(a.potential_savings_kwh.to_bits(), b.potential_savings_kwh.to_bits());
    assert_eq!(a.installed_kwp.to_bits(), b.installed_kwp.to_bits());
    assert_eq!(a.investment_eur.to_bits(), b.investment_eur.to_bits());
    assert_eq!(
        a.payback_years.map(f64::to_bits),
        b.payback_years.map(f64::to_bits)
    );
    assert_eq!(a.co2_avoided_kg.to_bits(), b.co2_avoided_kg.to_bits());
}

#[test]
fn informational_fields_do_not_change_result() {
    use pv_calc::model::{EnergyInterest, HousingType, Inputs};

    let est = common::default_estimator();
    let base = common::bill_inputs("Murcia", 95.0);
    let varied = Inputs {
        housing: HousingType::Chalet,
        area_m2: 640.0,
        occupants: 11,
        interests: [EnergyInterest::Wind].into_iter().collect(),
        ..base.clone()
    };
    assert_eq!(est.evaluate(&base), est.evaluate(&varied));
}

#[test]
fn sunnier_region_needs_less_capacity() {
    let est = common::default_estimator();
    let annual = 6000.0;
    let canarias = est.estimate("Canarias", annual).expect("known region");
    let asturias = est.estimate("Asturias", annual).expect("known region");
    assert!(canarias.installed_kwp < asturias.installed_kwp);
    assert_eq!(canarias.potential_savings_kwh, asturias.potential_savings_kwh);
}

#[test]
fn csv_report_for_worked_example() {
    let est = common::default_estimator();
    let e = est
        .evaluate(&common::bill_inputs("Cataluña", 60.0))
        .expect("valid inputs");

    let mut buf = Vec::new();
    write_csv(&e, &mut buf).expect("in-memory write");
    let text = String::from_utf8(buf).expect("utf-8");
    let expected = "kpi,valor\n\
                    Consumo anual,\"3,600\"\n\
                    Ahorro kWh,\"2,160\"\n\
                    FV kWp,1.39\n\
                    Inversión €,\"1,672\"\n\
                    Payback años,3.87\n\
                    CO2 kg/a,499\n";
    assert_eq!(text, expected);
}
