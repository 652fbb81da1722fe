//! Photovoltaic sizing model.
//!
//! Illustrative model: savings scale with consumption relative to regional
//! productivity times a flat self-consumption factor, bounded by actual
//! consumption (no export is modeled).

use tracing::debug;

use super::inputs::{ConsumptionMode, Inputs};
use super::tariff::Tariff;
use super::types::Estimate;
use crate::error::EstimateError;
use crate::region::specific_yield;

/// Share of regional PV output assumed to be self-consumed.
pub const SELF_CONSUMPTION_FACTOR: f64 = 0.6;
/// Floor of the self-consumption ratio.
pub const MIN_RATIO: f64 = 0.5;
/// Smallest installation the model will size (kWp).
pub const MIN_KWP: f64 = 0.5;
/// Months per year.
const MONTHS: f64 = 12.0;

/// Stateless estimator over a fixed [`Tariff`] and the static region table.
///
/// Holds no mutable state, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use pv_calc::model::{ConsumptionMode, Estimator};
///
/// let est = Estimator::default();
/// let annual = est.annual_consumption_kwh(ConsumptionMode::MonthlyKWh, 300.0);
/// assert_eq!(annual, 3600.0);
/// let e = est.estimate("Cataluña", annual).unwrap();
/// assert!(e.potential_savings_kwh <= annual);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Estimator {
    tariff: Tariff,
}

impl Estimator {
    /// Creates an estimator over the given tariff.
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Returns the tariff in use.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Converts a monthly figure into annual consumption (kWh/yr).
    ///
    /// `value` is not re-validated; callers guarantee it is >= 0.
    pub fn annual_consumption_kwh(&self, mode: ConsumptionMode, value: f64) -> f64 {
        let kwh_per_month = match mode {
            ConsumptionMode::MonthlyCurrency => value / self.tariff.price_per_kwh,
            ConsumptionMode::MonthlyKWh => value,
        };
        kwh_per_month * MONTHS
    }

    /// Sizes a PV installation for `region` and derives every KPI.
    ///
    /// # Arguments
    ///
    /// * `region` - Region name, looked up in [`crate::region::REGIONS`]
    /// * `annual_consumption_kwh` - Annual household consumption (>= 0)
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if `region` is not in the table,
    /// if `annual_consumption_kwh` is negative or not finite, or if the
    /// resulting KPIs overflow.
    pub fn estimate(
        &self,
        region: &str,
        annual_consumption_kwh: f64,
    ) -> Result<Estimate, EstimateError> {
        let yield_per_kwp = specific_yield(region)
            .ok_or_else(|| EstimateError::invalid(format!("unknown region \"{region}\"")))?;
        if !annual_consumption_kwh.is_finite() || annual_consumption_kwh < 0.0 {
            return Err(EstimateError::invalid(format!(
                "annual consumption must be a finite number >= 0, got {annual_consumption_kwh}"
            )));
        }

        let ratio = MIN_RATIO.max(annual_consumption_kwh / yield_per_kwp * SELF_CONSUMPTION_FACTOR);
        let potential_savings_kwh = annual_consumption_kwh.min(yield_per_kwp * ratio);
        let installed_kwp = MIN_KWP.max(potential_savings_kwh / yield_per_kwp);
        let investment_eur = installed_kwp * self.tariff.cost_per_kwp;
        let annual_savings_eur = potential_savings_kwh * self.tariff.price_per_kwh;
        let payback_years = (annual_savings_eur > 0.0).then(|| investment_eur / annual_savings_eur);
        let co2_avoided_kg = potential_savings_kwh * self.tariff.co2_kg_per_kwh;

        debug!(
            region,
            yield_per_kwp, ratio, potential_savings_kwh, installed_kwp, "estimate computed"
        );

        let estimate = Estimate {
            annual_consumption_kwh,
            potential_savings_kwh,
            installed_kwp,
            investment_eur,
            annual_savings_eur,
            payback_years,
            co2_avoided_kg,
        };
        if !estimate.is_finite() {
            return Err(EstimateError::invalid(format!(
                "annual consumption of {annual_consumption_kwh} kWh is too large to size"
            )));
        }
        Ok(estimate)
    }

    /// Runs the full pipeline for one request: annual consumption, then sizing.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] if the region is unknown or the
    /// monthly value converts to a non-finite annual consumption.
    pub fn evaluate(&self, inputs: &Inputs) -> Result<Estimate, EstimateError> {
        let annual = self.annual_consumption_kwh(inputs.mode, inputs.value);
        self.estimate(&inputs.region, annual)
    }
}
