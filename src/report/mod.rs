//! Presentation of an [`Estimate`]: formatted metrics, the comparison
//! chart, and thousands grouping.

pub mod chart;
pub mod format;
pub mod metrics;

use serde::Serialize;

pub use chart::ComparisonChart;
pub use metrics::{Metric, Metrics};

use crate::model::{Estimate, Inputs};

/// Everything the presentation layer shows for one request.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// Inputs the estimate was computed from.
    pub inputs: Inputs,
    /// Raw KPI values.
    pub estimate: Estimate,
    /// Formatted, labeled KPIs.
    pub metrics: Metrics,
    /// Consumption vs savings chart.
    pub chart: ComparisonChart,
}

impl EstimateReport {
    /// Bundles an estimate with its formatted views.
    pub fn new(inputs: Inputs, estimate: Estimate) -> Self {
        Self {
            metrics: Metrics::from_estimate(&estimate),
            chart: ComparisonChart::from_estimate(&estimate),
            inputs,
            estimate,
        }
    }
}
