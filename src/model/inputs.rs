//! Calculation inputs and the closed enums that feed them.
//!
//! Free-form user text (CLI flags, TOML, JSON) is parsed into these types at
//! the boundary; the estimator only ever sees already-parsed values.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::region;

/// Allowed floor area (m²).
pub const AREA_RANGE_M2: RangeInclusive<f64> = 20.0..=1000.0;
/// Form increment for the floor area (m²).
pub const AREA_STEP_M2: f64 = 5.0;
/// Allowed number of occupants.
pub const OCCUPANTS_RANGE: RangeInclusive<u32> = 1..=12;

/// Lowercases and strips whitespace so `"€ / mes"` and `"€/MES"` compare equal.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Housing type. Carried through for reporting; not used by the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum HousingType {
    /// Apartment ("Piso").
    #[default]
    #[serde(rename = "piso")]
    Flat,
    /// Detached or terraced house ("Casa").
    #[serde(rename = "casa")]
    House,
    /// Villa ("Chalet").
    #[serde(rename = "chalet")]
    Chalet,
}

impl HousingType {
    /// Every variant, in form order.
    pub const ALL: [Self; 3] = [Self::Flat, Self::House, Self::Chalet];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Piso",
            Self::House => "Casa",
            Self::Chalet => "Chalet",
        }
    }
}

impl FromStr for HousingType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "piso" | "flat" => Ok(Self::Flat),
            "casa" | "house" => Ok(Self::House),
            "chalet" => Ok(Self::Chalet),
            _ => Err(EstimateError::invalid(format!(
                "unknown housing type \"{s}\" (expected piso, casa or chalet)"
            ))),
        }
    }
}

impl TryFrom<String> for HousingType {
    type Error = EstimateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Unit in which the household reports its monthly consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConsumptionMode {
    /// Monthly electricity bill in currency ("€ / mes").
    #[default]
    #[serde(rename = "eur")]
    MonthlyCurrency,
    /// Monthly energy in kWh ("kWh / mes").
    #[serde(rename = "kwh")]
    MonthlyKWh,
}

impl ConsumptionMode {
    /// Every variant, in form order.
    pub const ALL: [Self; 2] = [Self::MonthlyCurrency, Self::MonthlyKWh];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MonthlyCurrency => "€ / mes",
            Self::MonthlyKWh => "kWh / mes",
        }
    }
}

impl FromStr for ConsumptionMode {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "€/mes" | "eur" | "currency" => Ok(Self::MonthlyCurrency),
            "kwh/mes" | "kwh" => Ok(Self::MonthlyKWh),
            _ => Err(EstimateError::invalid(format!(
                "unknown consumption mode \"{s}\" (expected eur or kwh)"
            ))),
        }
    }
}

impl TryFrom<String> for ConsumptionMode {
    type Error = EstimateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Energy source the household is interested in. Informational only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum EnergyInterest {
    /// Photovoltaic.
    #[serde(rename = "solar")]
    Solar,
    /// Wind ("Eólica").
    #[serde(rename = "eolica")]
    Wind,
}

impl EnergyInterest {
    /// Every variant, in form order.
    pub const ALL: [Self; 2] = [Self::Solar, Self::Wind];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::Wind => "Eólica",
        }
    }
}

impl FromStr for EnergyInterest {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "solar" => Ok(Self::Solar),
            "eólica" | "eolica" | "wind" => Ok(Self::Wind),
            _ => Err(EstimateError::invalid(format!(
                "unknown energy interest \"{s}\" (expected solar or eolica)"
            ))),
        }
    }
}

impl TryFrom<String> for EnergyInterest {
    type Error = EstimateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(HousingType, ConsumptionMode, EnergyInterest);

/// One calculation request.
///
/// Housing type, area, occupants and interests are collected by every
/// surface but do not enter any formula yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Inputs {
    /// Housing type.
    pub housing: HousingType,
    /// Floor area (m²), within [`AREA_RANGE_M2`].
    pub area_m2: f64,
    /// Number of occupants, within [`OCCUPANTS_RANGE`].
    pub occupants: u32,
    /// Unit of [`Inputs::value`].
    pub mode: ConsumptionMode,
    /// Monthly consumption in the unit given by `mode` (>= 0).
    pub value: f64,
    /// Region name; must be a key of [`crate::region::REGIONS`].
    pub region: String,
    /// Energy sources of interest.
    pub interests: BTreeSet<EnergyInterest>,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            housing: HousingType::Flat,
            area_m2: 80.0,
            occupants: 3,
            mode: ConsumptionMode::MonthlyCurrency,
            value: 60.0,
            region: region::default_region().to_string(),
            interests: BTreeSet::from([EnergyInterest::Solar]),
        }
    }
}

impl Inputs {
    /// Checks every field against its allowed domain.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if !self.area_m2.is_finite() || !AREA_RANGE_M2.contains(&self.area_m2) {
            return Err(EstimateError::invalid(format!(
                "area_m2 must be in [{}, {}], got {}",
                AREA_RANGE_M2.start(),
                AREA_RANGE_M2.end(),
                self.area_m2
            )));
        }
        if !OCCUPANTS_RANGE.contains(&self.occupants) {
            return Err(EstimateError::invalid(format!(
                "occupants must be in [{}, {}], got {}",
                OCCUPANTS_RANGE.start(),
                OCCUPANTS_RANGE.end(),
                self.occupants
            )));
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(EstimateError::invalid(format!(
                "value must be a finite number >= 0, got {}",
                self.value
            )));
        }
        if !region::contains(&self.region) {
            return Err(EstimateError::invalid(format!(
                "unknown region \"{}\"",
                self.region
            )));
        }
        Ok(())
    }
}
