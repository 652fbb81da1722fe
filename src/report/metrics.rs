//! The six labeled result metrics shown to the user.

use std::fmt;

use serde::Serialize;

use super::format::group_thousands;
use crate::model::Estimate;

/// Shown in place of the payback period when there are no savings.
pub const NOT_APPLICABLE: &str = "n/d";

/// A labeled, already formatted result value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Display label.
    pub label: &'static str,
    /// Formatted value with unit.
    pub value: String,
}

/// Result metrics in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metrics(pub Vec<Metric>);

impl Metrics {
    /// Formats every KPI of `estimate`.
    pub fn from_estimate(e: &Estimate) -> Self {
        let payback = e
            .payback_years
            .map_or_else(|| NOT_APPLICABLE.to_string(), |y| format!("{y:.1} años"));
        Self(vec![
            metric(
                "Consumo anual",
                format!("{} kWh/a", group_thousands(e.annual_consumption_kwh)),
            ),
            metric(
                "Ahorro potencial",
                format!("{} kWh/a", group_thousands(e.potential_savings_kwh)),
            ),
            metric(
                "CO₂ evitado",
                format!("{} kg/a", group_thousands(e.co2_avoided_kg)),
            ),
            metric("FV estimada", format!("{:.2} kWp", e.installed_kwp)),
            metric(
                "Inversión",
                format!("{} €", group_thousands(e.investment_eur)),
            ),
            metric("Payback", payback),
        ])
    }

    /// Iterates metrics in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.0.iter()
    }

    /// Finds a metric by label.
    pub fn get(&self, label: &str) -> Option<&Metric> {
        self.0.iter().find(|m| m.label == label)
    }
}

fn metric(label: &'static str, value: String) -> Metric {
    Metric { label, value }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Resultados ---")?;
        let width = self
            .0
            .iter()
            .map(|m| m.label.chars().count())
            .max()
            .unwrap_or(0);
        for (i, m) in self.0.iter().enumerate() {
            // chars, not bytes, so "CO₂" and "Inversión" align
            let pad = width - m.label.chars().count();
            write!(f, "{}:{}  {}", m.label, " ".repeat(pad), m.value)?;
            if i + 1 < self.0.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
