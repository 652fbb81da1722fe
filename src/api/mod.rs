//! REST API for estimates and the CSV report.
//!
//! Provides three endpoints:
//! - `GET /regions` — region yield table
//! - `POST /estimate` — inputs in, estimate with metrics and chart out
//! - `POST /report.csv` — inputs in, CSV report download out

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::model::Estimator;

pub use types::{ErrorResponse, RegionEntry};

/// Immutable application state shared across all request handlers.
///
/// Wrapped in `Arc`; no locks needed since the estimator is read-only and
/// every request carries its own inputs.
pub struct AppState {
    /// Estimator configured with the tariff loaded at startup.
    pub estimator: Estimator,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/regions", get(handlers::get_regions))
        .route("/estimate", post(handlers::post_estimate))
        .route("/report.csv", post(handlers::post_report_csv))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    tracing::info!(%addr, "API server listening");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
