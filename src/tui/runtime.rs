//! Form state for the interactive calculator.

use std::path::PathBuf;

use crate::error::EstimateError;
use crate::io::export::{FILE_NAME, export_csv};
use crate::model::inputs::{AREA_RANGE_M2, AREA_STEP_M2, OCCUPANTS_RANGE};
use crate::model::{ConsumptionMode, EnergyInterest, Estimate, Estimator, HousingType, Inputs};
use crate::region::{self, REGIONS};

/// Increment applied to the consumption value per key press.
const VALUE_STEP: f64 = 1.0;
/// Multiplier applied to numeric steps by [`App::adjust_coarse`].
const COARSE_FACTOR: f64 = 10.0;

/// Editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Housing type selector.
    Housing,
    /// Floor area (m²).
    Area,
    /// Number of occupants.
    Occupants,
    /// Consumption unit.
    Mode,
    /// Monthly consumption value.
    Value,
    /// Region selector.
    Region,
    /// Solar interest toggle.
    Solar,
    /// Wind interest toggle.
    Wind,
}

impl Field {
    /// Every field, top to bottom.
    pub const ALL: [Self; 8] = [
        Self::Housing,
        Self::Area,
        Self::Occupants,
        Self::Mode,
        Self::Value,
        Self::Region,
        Self::Solar,
        Self::Wind,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Housing => "Tipo de vivienda",
            Self::Area => "Metros cuadrados",
            Self::Occupants => "Número de personas",
            Self::Mode => "Consumo en",
            Self::Value => "Valor",
            Self::Region => "Región",
            Self::Solar => "Solar",
            Self::Wind => "Eólica",
        }
    }
}

/// Moves `index` by `delta` within `len` entries, wrapping at both ends.
fn cycle(index: usize, len: usize, delta: i32) -> usize {
    let len = len as i64;
    (index as i64 + i64::from(delta)).rem_euclid(len) as usize
}

/// TUI application state.
pub struct App {
    /// Estimator with the tariff loaded at startup.
    estimator: Estimator,
    /// Inputs the form started from (restored on reset).
    initial: Inputs,
    /// Current form values.
    pub inputs: Inputs,
    /// Result of the latest recompute.
    pub result: Result<Estimate, EstimateError>,
    /// Index into [`Field::ALL`] of the focused field.
    pub selected: usize,
    /// Where `s` writes the CSV report.
    pub report_path: PathBuf,
    /// Last status line (save confirmation or error).
    pub status: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the form from initial inputs and computes the first estimate.
    pub fn new(estimator: Estimator, inputs: Inputs) -> Self {
        let result = estimator.evaluate(&inputs);
        Self {
            estimator,
            initial: inputs.clone(),
            inputs,
            result,
            selected: 0,
            report_path: PathBuf::from(FILE_NAME),
            status: None,
            quit: false,
        }
    }

    /// Returns the focused field.
    pub fn field(&self) -> Field {
        Field::ALL[self.selected]
    }

    /// Moves focus to the next field (wrapping).
    pub fn next_field(&mut self) {
        self.selected = cycle(self.selected, Field::ALL.len(), 1);
    }

    /// Moves focus to the previous field (wrapping).
    pub fn prev_field(&mut self) {
        self.selected = cycle(self.selected, Field::ALL.len(), -1);
    }

    /// Adjusts the focused field one step up (`+1`) or down (`-1`) and
    /// recomputes.
    pub fn adjust(&mut self, delta: i32) {
        self.step(delta, 1.0);
    }

    /// Like [`App::adjust`], but area and value move ten steps at once.
    pub fn adjust_coarse(&mut self, delta: i32) {
        self.step(delta, COARSE_FACTOR);
    }

    fn step(&mut self, delta: i32, scale: f64) {
        let step = f64::from(delta) * scale;
        match self.field() {
            Field::Housing => {
                let i = HousingType::ALL
                    .iter()
                    .position(|h| *h == self.inputs.housing)
                    .unwrap_or(0);
                self.inputs.housing = HousingType::ALL[cycle(i, HousingType::ALL.len(), delta)];
            }
            Field::Area => {
                self.inputs.area_m2 = (self.inputs.area_m2 + step * AREA_STEP_M2)
                    .clamp(*AREA_RANGE_M2.start(), *AREA_RANGE_M2.end());
            }
            Field::Occupants => {
                let next = i64::from(self.inputs.occupants) + i64::from(delta);
                let lo = i64::from(*OCCUPANTS_RANGE.start());
                let hi = i64::from(*OCCUPANTS_RANGE.end());
                self.inputs.occupants = u32::try_from(next.clamp(lo, hi))
                    .unwrap_or(*OCCUPANTS_RANGE.start());
            }
            Field::Mode => {
                let i = ConsumptionMode::ALL
                    .iter()
                    .position(|m| *m == self.inputs.mode)
                    .unwrap_or(0);
                self.inputs.mode =
                    ConsumptionMode::ALL[cycle(i, ConsumptionMode::ALL.len(), delta)];
            }
            Field::Value => {
                self.inputs.value = (self.inputs.value + step * VALUE_STEP).max(0.0);
            }
            Field::Region => {
                let i = region::position(&self.inputs.region).unwrap_or(0);
                self.inputs.region = REGIONS[cycle(i, REGIONS.len(), delta)].name.to_string();
            }
            Field::Solar => self.toggle_interest(EnergyInterest::Solar),
            Field::Wind => self.toggle_interest(EnergyInterest::Wind),
        }
        self.recompute();
    }

    /// Appends `digit` to the integer part of the value field; no-op on other
    /// fields or non-digit characters.
    pub fn type_digit(&mut self, digit: char) {
        let Some(d) = digit.to_digit(10) else {
            return;
        };
        if self.field() != Field::Value {
            return;
        }
        self.inputs.value = self.inputs.value.trunc() * 10.0 + f64::from(d);
        self.recompute();
    }

    /// Drops the last integer digit of the value field; no-op elsewhere.
    pub fn erase_digit(&mut self) {
        if self.field() != Field::Value {
            return;
        }
        self.inputs.value = (self.inputs.value / 10.0).trunc();
        self.recompute();
    }

    /// Toggles the focused interest field; no-op on other fields.
    pub fn toggle(&mut self) {
        match self.field() {
            Field::Solar | Field::Wind => self.adjust(1),
            _ => {}
        }
    }

    fn toggle_interest(&mut self, interest: EnergyInterest) {
        if !self.inputs.interests.remove(&interest) {
            self.inputs.interests.insert(interest);
        }
    }

    /// Re-runs the estimator on the current inputs.
    pub fn recompute(&mut self) {
        self.result = self.estimator.evaluate(&self.inputs);
    }

    /// Restores the initial inputs.
    pub fn reset(&mut self) {
        self.inputs = self.initial.clone();
        self.status = None;
        self.recompute();
    }

    /// Writes the current estimate to [`App::report_path`].
    pub fn save_report(&mut self) {
        let message = match &self.result {
            Ok(estimate) => match export_csv(estimate, &self.report_path) {
                Ok(()) => format!("Informe guardado en {}", self.report_path.display()),
                Err(e) => format!("error: no se pudo guardar el informe: {e}"),
            },
            Err(e) => format!("error: {e}"),
        };
        self.status = Some(message);
    }

    /// Current display value of `field`.
    pub fn field_value(&self, field: Field) -> String {
        let checkbox = |on: bool| (if on { "[x]" } else { "[ ]" }).to_string();
        match field {
            Field::Housing => self.inputs.housing.label().to_string(),
            Field::Area => format!("{:.0}", self.inputs.area_m2),
            Field::Occupants => self.inputs.occupants.to_string(),
            Field::Mode => self.inputs.mode.label().to_string(),
            Field::Value => format!("{:.2}", self.inputs.value),
            Field::Region => self.inputs.region.clone(),
            Field::Solar => checkbox(self.inputs.interests.contains(&EnergyInterest::Solar)),
            Field::Wind => checkbox(self.inputs.interests.contains(&EnergyInterest::Wind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Estimator::default(), Inputs::default())
    }

    fn focus(app: &mut App, field: Field) {
        app.selected = Field::ALL.iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn starts_with_computed_estimate() {
        let app = app();
        assert_eq!(app.field(), Field::Housing);
        let e = app.result.as_ref().expect("default inputs are valid");
        assert!((e.annual_consumption_kwh - 3600.0).abs() < 1e-9);
    }

    #[test]
    fn focus_wraps_around() {
        let mut app = app();
        app.prev_field();
        assert_eq!(app.field(), Field::Wind);
        app.next_field();
        assert_eq!(app.field(), Field::Housing);
    }

    #[test]
    fn value_change_recomputes() {
        let mut app = app();
        focus(&mut app, Field::Value);
        app.adjust(1);
        assert_eq!(app.inputs.value, 61.0);
        let e = app.result.as_ref().unwrap();
        assert!((e.annual_consumption_kwh - 61.0 / 0.2 * 12.0).abs() < 1e-9);
    }

    #[test]
    fn value_never_goes_negative() {
        let mut app = App::new(
            Estimator::default(),
            Inputs {
                value: 0.5,
                ..Inputs::default()
            },
        );
        focus(&mut app, Field::Value);
        app.adjust(-1);
        assert_eq!(app.inputs.value, 0.0);
        assert_eq!(app.result.as_ref().unwrap().payback_years, None);
    }

    #[test]
    fn coarse_adjust_moves_ten_steps() {
        let mut app = app();
        focus(&mut app, Field::Value);
        app.adjust_coarse(1);
        assert_eq!(app.inputs.value, 70.0);
        app.adjust_coarse(-1);
        app.adjust_coarse(-1);
        assert_eq!(app.inputs.value, 50.0);

        focus(&mut app, Field::Area);
        app.adjust_coarse(1);
        assert_eq!(app.inputs.area_m2, 130.0);
    }

    #[test]
    fn digits_are_typed_into_value() {
        let mut app = app();
        focus(&mut app, Field::Mode);
        app.adjust(1);
        focus(&mut app, Field::Value);
        app.erase_digit();
        app.erase_digit();
        assert_eq!(app.inputs.value, 0.0);
        for c in ['3', '5', '0'] {
            app.type_digit(c);
        }
        assert_eq!(app.inputs.value, 350.0);
        let e = app.result.as_ref().unwrap();
        assert_eq!(e.annual_consumption_kwh, 4200.0);
    }

    #[test]
    fn digits_ignored_outside_value() {
        let mut app = app();
        let before = app.inputs.clone();
        app.type_digit('7');
        app.erase_digit();
        focus(&mut app, Field::Value);
        app.type_digit('x');
        assert_eq!(app.inputs, before);
    }

    #[test]
    fn area_and_occupants_stay_in_bounds() {
        let mut app = app();
        focus(&mut app, Field::Area);
        for _ in 0..100 {
            app.adjust(-1);
        }
        assert_eq!(app.inputs.area_m2, 20.0);

        focus(&mut app, Field::Occupants);
        for _ in 0..20 {
            app.adjust(1);
        }
        assert_eq!(app.inputs.occupants, 12);
    }

    #[test]
    fn region_cycles_through_table() {
        let mut app = app();
        focus(&mut app, Field::Region);
        app.adjust(-1);
        assert_eq!(app.inputs.region, "Melilla");
        app.adjust(1);
        app.adjust(1);
        assert_eq!(app.inputs.region, "Aragón");
    }

    #[test]
    fn mode_switch_changes_conversion() {
        let mut app = app();
        focus(&mut app, Field::Mode);
        app.adjust(1);
        assert_eq!(app.inputs.mode, ConsumptionMode::MonthlyKWh);
        assert_eq!(app.result.as_ref().unwrap().annual_consumption_kwh, 720.0);
    }

    #[test]
    fn interests_toggle() {
        let mut app = app();
        focus(&mut app, Field::Solar);
        app.toggle();
        assert!(app.inputs.interests.is_empty());
        focus(&mut app, Field::Wind);
        app.toggle();
        assert!(app.inputs.interests.contains(&EnergyInterest::Wind));
        assert_eq!(app.field_value(Field::Wind), "[x]");
    }

    #[test]
    fn toggle_ignores_non_interest_fields() {
        let mut app = app();
        let before = app.inputs.clone();
        app.toggle();
        assert_eq!(app.inputs, before);
    }

    #[test]
    fn reset_restores_initial_inputs() {
        let mut app = app();
        focus(&mut app, Field::Value);
        app.adjust(1);
        app.reset();
        assert_eq!(app.inputs, Inputs::default());
    }

    #[test]
    fn save_writes_report() {
        let mut app = app();
        let path = std::env::temp_dir().join(format!("pv-calc-tui-{}.csv", std::process::id()));
        app.report_path = path.clone();
        app.save_report();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(content.starts_with("kpi,valor"));
        assert!(app.status.as_deref().unwrap().contains("Informe guardado"));
    }
}
