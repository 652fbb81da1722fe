//! API response types.

use serde::Serialize;

use crate::region::Region;

/// One row of `GET /regions`.
#[derive(Debug, Serialize)]
pub struct RegionEntry {
    /// Region name, usable as `region` in requests.
    pub name: &'static str,
    /// Annual specific yield (kWh per kWp per year).
    pub yield_kwh_per_kwp: f64,
}

impl From<&Region> for RegionEntry {
    fn from(r: &Region) -> Self {
        Self {
            name: r.name,
            yield_kwh_per_kwp: r.yield_kwh_per_kwp,
        }
    }
}

/// Error body returned with 4xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
