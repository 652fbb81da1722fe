//! Consumption vs savings comparison chart.

use std::fmt::Write as _;

use serde::Serialize;

use super::format::group_thousands;
use crate::model::Estimate;

/// Chart title.
pub const TITLE: &str = "Consumo vs Ahorro";
/// Y-axis label.
pub const Y_LABEL: &str = "kWh/año";

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Category label.
    pub label: &'static str,
    /// Bar height (kWh/yr).
    pub value: f64,
}

/// Two-bar comparison of annual consumption and potential savings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    /// Chart title.
    pub title: &'static str,
    /// Y-axis label.
    pub y_label: &'static str,
    /// Bars in display order.
    pub bars: Vec<Bar>,
}

impl ComparisonChart {
    /// Builds the chart for one estimate.
    pub fn from_estimate(e: &Estimate) -> Self {
        Self {
            title: TITLE,
            y_label: Y_LABEL,
            bars: vec![
                Bar {
                    label: "Consumo",
                    value: e.annual_consumption_kwh,
                },
                Bar {
                    label: "Ahorro",
                    value: e.potential_savings_kwh,
                },
            ],
        }
    }

    /// Largest bar value, or 0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    /// Renders horizontal bars scaled so the tallest spans `width` cells.
    pub fn render_text(&self, width: usize) -> String {
        let max = self.max_value();
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{} ({})", self.title, self.y_label);
        for bar in &self.bars {
            let cells = if max > 0.0 {
                ((bar.value / max) * width as f64).round() as usize
            } else {
                0
            };
            let _ = write!(
                out,
                "\n{:<label_width$} │{} {}",
                bar.label,
                "█".repeat(cells),
                group_thousands(bar.value),
            );
        }
        out
    }
}
