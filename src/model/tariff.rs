//! Price, installation cost and emission constants.

use serde::{Deserialize, Serialize};

/// Electricity price (€/kWh).
pub const PRICE_PER_KWH: f64 = 0.20;
/// Installed PV cost (€/kWp).
pub const COST_PER_KWP: f64 = 1200.0;
/// Grid emission factor (kg CO2 per kWh avoided).
pub const CO2_FACTOR: f64 = 0.231;

/// Constants used by the estimator.
///
/// Defaults to the compile-time constants; a scenario file may override
/// them once at load time.
///
/// # Examples
///
/// ```
/// use pv_calc::model::tariff::Tariff;
///
/// let t = Tariff::default();
/// assert_eq!(t.price_per_kwh, 0.20);
/// assert_eq!(t.cost_per_kwp, 1200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tariff {
    /// Electricity price (€/kWh, > 0).
    pub price_per_kwh: f64,
    /// Installed PV cost (€/kWp, > 0).
    pub cost_per_kwp: f64,
    /// Emission factor (kg CO2/kWh, > 0).
    pub co2_kg_per_kwh: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            price_per_kwh: PRICE_PER_KWH,
            cost_per_kwp: COST_PER_KWP,
            co2_kg_per_kwh: CO2_FACTOR,
        }
    }
}
