//! Residential PV savings calculator.
//!
//! Estimates annual consumption, PV potential savings, installed capacity,
//! investment, payback and CO2 reduction from a handful of household inputs.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod region;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout stays reserved for results. The filter is
/// read from `RUST_LOG` and defaults to `warn`. Must be called at most once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
