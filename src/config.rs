//! TOML-based scenario configuration and preset definitions.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::inputs::{AREA_RANGE_M2, OCCUPANTS_RANGE};
use crate::model::{ConsumptionMode, EnergyInterest, Estimator, HousingType, Inputs, Tariff};
use crate::region;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the calculator's initial form. Load
/// from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::default_form`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Descriptive household fields.
    #[serde(default)]
    pub household: HouseholdConfig,
    /// Consumption figure and region.
    #[serde(default)]
    pub consumption: ConsumptionConfig,
    /// Price, cost and emission constants.
    #[serde(default)]
    pub tariff: Tariff,
}

/// Descriptive household fields (not used by the sizing formulas).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HouseholdConfig {
    /// Housing type: `"piso"`, `"casa"` or `"chalet"`.
    pub housing: HousingType,
    /// Floor area (m², 20–1000).
    pub area_m2: f64,
    /// Occupants (1–12).
    pub occupants: u32,
    /// Energy sources of interest: `"solar"`, `"eolica"`.
    pub interests: BTreeSet<EnergyInterest>,
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        let inputs = Inputs::default();
        Self {
            housing: inputs.housing,
            area_m2: inputs.area_m2,
            occupants: inputs.occupants,
            interests: inputs.interests,
        }
    }
}

/// Consumption figure and region.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsumptionConfig {
    /// Unit of `value`: `"eur"` (monthly bill) or `"kwh"` (monthly energy).
    pub mode: ConsumptionMode,
    /// Monthly consumption (>= 0).
    pub value: f64,
    /// Region name from the yield table.
    pub region: String,
}

impl Default for ConsumptionConfig {
    fn default() -> Self {
        let inputs = Inputs::default();
        Self {
            mode: inputs.mode,
            value: inputs.value,
            region: inputs.region,
        }
    }
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "casa", "chalet"];

    /// Returns the calculator's initial form.
    pub fn default_form() -> Self {
        Self::default()
    }

    /// Returns the house preset: larger home reporting kWh, central region.
    pub fn casa() -> Self {
        Self {
            household: HouseholdConfig {
                housing: HousingType::House,
                area_m2: 150.0,
                occupants: 4,
                interests: BTreeSet::from([EnergyInterest::Solar, EnergyInterest::Wind]),
            },
            consumption: ConsumptionConfig {
                mode: ConsumptionMode::MonthlyKWh,
                value: 350.0,
                region: "Comunidad de Madrid".to_string(),
            },
            tariff: Tariff::default(),
        }
    }

    /// Returns the chalet preset: high bill in the sunniest region.
    pub fn chalet() -> Self {
        Self {
            household: HouseholdConfig {
                housing: HousingType::Chalet,
                area_m2: 300.0,
                occupants: 5,
                ..HouseholdConfig::default()
            },
            consumption: ConsumptionConfig {
                mode: ConsumptionMode::MonthlyCurrency,
                value: 140.0,
                region: "Canarias".to_string(),
            },
            tariff: Tariff::default(),
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::default_form()),
            "casa" => Ok(Self::casa()),
            "chalet" => Ok(Self::chalet()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let h = &self.household;
        if !h.area_m2.is_finite() || !AREA_RANGE_M2.contains(&h.area_m2) {
            errors.push(ConfigError::new(
                "household.area_m2",
                format!(
                    "must be in [{}, {}]",
                    AREA_RANGE_M2.start(),
                    AREA_RANGE_M2.end()
                ),
            ));
        }
        if !OCCUPANTS_RANGE.contains(&h.occupants) {
            errors.push(ConfigError::new(
                "household.occupants",
                format!(
                    "must be in [{}, {}]",
                    OCCUPANTS_RANGE.start(),
                    OCCUPANTS_RANGE.end()
                ),
            ));
        }

        let c = &self.consumption;
        if !c.value.is_finite() || c.value < 0.0 {
            errors.push(ConfigError::new("consumption.value", "must be >= 0"));
        }
        if !region::contains(&c.region) {
            errors.push(ConfigError::new(
                "consumption.region",
                format!("unknown region \"{}\"", c.region),
            ));
        }

        let t = &self.tariff;
        for (field, value) in [
            ("tariff.price_per_kwh", t.price_per_kwh),
            ("tariff.cost_per_kwp", t.cost_per_kwp),
            ("tariff.co2_kg_per_kwh", t.co2_kg_per_kwh),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ConfigError::new(field, "must be > 0"));
            }
        }

        if errors.is_empty() {
            let annual = Estimator::new(*t).annual_consumption_kwh(c.mode, c.value);
            if !annual.is_finite() {
                errors.push(ConfigError::new(
                    "consumption.value",
                    format!("{} gives a non-finite annual consumption", c.value),
                ));
            }
        }

        errors
    }

    /// Builds the calculation inputs described by this scenario.
    pub fn to_inputs(&self) -> Inputs {
        Inputs {
            housing: self.household.housing,
            area_m2: self.household.area_m2,
            occupants: self.household.occupants,
            mode: self.consumption.mode,
            value: self.consumption.value,
            region: self.consumption.region.clone(),
            interests: self.household.interests.clone(),
        }
    }
}
