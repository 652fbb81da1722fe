//! Estimation output.

use serde::Serialize;

/// KPIs derived from one set of inputs.
///
/// A pure function of the inputs and the static tables; recomputed on every
/// input change and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Annual household consumption (kWh/yr).
    pub annual_consumption_kwh: f64,
    /// Consumption that PV could offset (kWh/yr), never above consumption.
    pub potential_savings_kwh: f64,
    /// Installed PV capacity (kWp), at least 0.5.
    pub installed_kwp: f64,
    /// Upfront investment (€).
    pub investment_eur: f64,
    /// Annual bill savings (€/yr).
    pub annual_savings_eur: f64,
    /// Years until savings repay the investment; `None` when there are no savings.
    pub payback_years: Option<f64>,
    /// Emissions avoided (kg CO2/yr).
    pub co2_avoided_kg: f64,
}

impl Estimate {
    /// Whether every KPI is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.annual_consumption_kwh,
            self.potential_savings_kwh,
            self.installed_kwp,
            self.investment_eur,
            self.annual_savings_eur,
            self.co2_avoided_kg,
        ]
        .iter()
        .chain(self.payback_years.as_ref())
        .all(|v| v.is_finite())
    }
}
