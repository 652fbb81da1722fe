//! Error types shared by the estimator, the input boundary, and config loading.

use thiserror::Error;

/// Failure of a single calculation request.
///
/// The only kind the core raises is [`EstimateError::InvalidInput`]; every
/// numeric step is total over the validated input domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// An input lies outside its allowed domain (unknown region, area out of
    /// range, negative consumption, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EstimateError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"household.area_m2"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
