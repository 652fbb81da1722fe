//! Estimation core: inputs, tariff constants, the sizing model and its output.

pub mod estimator;
/// Calculation inputs and their closed enums.
pub mod inputs;
pub mod tariff;
pub mod types;

pub use estimator::Estimator;
pub use inputs::{ConsumptionMode, EnergyInterest, HousingType, Inputs};
pub use tariff::Tariff;
pub use types::Estimate;
