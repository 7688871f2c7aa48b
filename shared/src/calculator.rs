//! Calculator application state
//!
//! The presentation layer never calls the engine directly. It feeds
//! [`CalculatorEvent`]s into a [`Calculator`], which owns the raw form, the
//! selected gender and mode, and the last computed report.

use crate::errors::{MetricResult, Unavailable};
use crate::health_metrics::Gender;
use crate::measurements::{AnalysisMode, Field, MeasurementForm};
use crate::report::{evaluate, MetricsReport};
use crate::units::{LengthUnit, WeightUnit};
use tracing::debug;

/// Discrete UI event
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
    /// The user edited a form field
    Input { field: Field, text: String },
    SelectGender(Gender),
    SetMode(AnalysisMode),
    Calculate,
    /// Clear every input, the gender and the result
    Reset,
}

/// Startup preferences for a calculator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculatorSettings {
    pub mode: AnalysisMode,
    /// Recompute after every input event instead of waiting for `Calculate`
    pub live_updates: bool,
    pub weight_unit: WeightUnit,
    pub length_unit: LengthUnit,
}

/// Form state plus the last report
#[derive(Debug, Clone)]
pub struct Calculator {
    settings: CalculatorSettings,
    form: MeasurementForm,
    gender: Gender,
    mode: AnalysisMode,
    report: Option<MetricsReport>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorSettings::default())
    }
}

impl Calculator {
    pub fn new(settings: CalculatorSettings) -> Self {
        Self {
            form: MeasurementForm::with_units(settings.weight_unit, settings.length_unit),
            gender: Gender::default(),
            mode: settings.mode,
            report: None,
            settings,
        }
    }

    /// Apply one event.
    ///
    /// `Calculate` fails with the missing field when weight or height is not
    /// usable; the previous report is dropped in that case so stale results
    /// are never shown next to new inputs.
    pub fn apply(&mut self, event: CalculatorEvent) -> MetricResult<()> {
        debug!(?event, "Applying calculator event");
        match event {
            CalculatorEvent::Input { field, text } => {
                self.form.set(field, text);
                self.refresh_live();
                Ok(())
            }
            CalculatorEvent::SelectGender(gender) => {
                self.gender = gender;
                self.refresh_live();
                Ok(())
            }
            CalculatorEvent::SetMode(mode) => {
                self.mode = mode;
                self.refresh_live();
                Ok(())
            }
            CalculatorEvent::Calculate => self.calculate(),
            CalculatorEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    fn calculate(&mut self) -> MetricResult<()> {
        match self.form.to_measurements(self.gender) {
            Ok(measurements) => {
                self.report = Some(evaluate(&measurements, self.mode));
                Ok(())
            }
            Err(reason) => {
                debug!(%reason, "Calculation skipped");
                self.report = None;
                Err(reason)
            }
        }
    }

    fn refresh_live(&mut self) {
        if self.settings.live_updates {
            // An incomplete form simply clears the report
            let _ = self.calculate();
        }
    }

    /// Clears inputs, gender and results; the analysis mode stays as selected
    fn reset(&mut self) {
        self.form.clear();
        self.gender = Gender::default();
        self.report = None;
    }

    pub fn form(&self) -> &MeasurementForm {
        &self.form
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Last computed report, if any
    pub fn report(&self) -> Option<&MetricsReport> {
        self.report.as_ref()
    }

    /// Reason the form cannot be calculated yet, if any
    pub fn missing_input(&self) -> Option<Unavailable> {
        self.form.to_measurements(self.gender).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::BmiCategory;

    fn input(field: Field, text: &str) -> CalculatorEvent {
        CalculatorEvent::Input {
            field,
            text: text.to_string(),
        }
    }

    fn filled(calculator: &mut Calculator) {
        calculator.apply(input(Field::Weight, "70")).unwrap();
        calculator.apply(input(Field::Height, "175")).unwrap();
    }

    #[test]
    fn test_calculate_produces_report() {
        let mut calculator = Calculator::default();
        filled(&mut calculator);
        assert!(calculator.report().is_none());

        calculator.apply(CalculatorEvent::Calculate).unwrap();
        let report = calculator.report().unwrap();
        assert_eq!(report.bmi.computed().unwrap().category, BmiCategory::Normal);
        assert!(report.advanced.is_none());
    }

    #[test]
    fn test_calculate_without_height_reports_missing_field() {
        let mut calculator = Calculator::default();
        calculator.apply(input(Field::Weight, "70")).unwrap();
        assert_eq!(calculator.missing_input(), Some(Unavailable::missing(Field::Height)));
        assert_eq!(
            calculator.apply(CalculatorEvent::Calculate),
            Err(Unavailable::missing(Field::Height))
        );
        assert!(calculator.report().is_none());
    }

    #[test]
    fn test_failed_calculate_drops_stale_report() {
        let mut calculator = Calculator::default();
        filled(&mut calculator);
        calculator.apply(CalculatorEvent::Calculate).unwrap();
        calculator.apply(input(Field::Height, "")).unwrap();
        assert!(calculator.report().is_some());

        assert!(calculator.apply(CalculatorEvent::Calculate).is_err());
        assert!(calculator.report().is_none());
    }

    #[test]
    fn test_advanced_mode_and_gender_apply_on_calculate() {
        let mut calculator = Calculator::default();
        filled(&mut calculator);
        calculator.apply(input(Field::Neck, "34")).unwrap();
        calculator.apply(input(Field::Waist, "70")).unwrap();
        calculator.apply(CalculatorEvent::SelectGender(Gender::Female)).unwrap();
        calculator.apply(CalculatorEvent::SetMode(AnalysisMode::Advanced)).unwrap();
        calculator.apply(CalculatorEvent::Calculate).unwrap();

        let report = calculator.report().unwrap();
        assert_eq!(report.gender, Gender::Female);
        let advanced = report.advanced.as_ref().unwrap();
        assert_eq!(advanced.body_fat.reason(), Some(Unavailable::missing(Field::Hip)));
        assert!(advanced.waist_to_height.is_computed());
    }

    #[test]
    fn test_reset_clears_inputs_and_keeps_mode() {
        let settings = CalculatorSettings {
            weight_unit: WeightUnit::Lbs,
            ..CalculatorSettings::default()
        };
        let mut calculator = Calculator::new(settings);
        filled(&mut calculator);
        calculator.apply(CalculatorEvent::SelectGender(Gender::Female)).unwrap();
        calculator.apply(CalculatorEvent::SetMode(AnalysisMode::Advanced)).unwrap();
        calculator.apply(CalculatorEvent::Calculate).unwrap();

        calculator.apply(CalculatorEvent::Reset).unwrap();
        assert!(calculator.report().is_none());
        assert_eq!(calculator.gender(), Gender::Male);
        assert_eq!(calculator.mode(), AnalysisMode::Advanced);
        assert!(calculator.form().weight.is_empty());
        assert_eq!(calculator.form().weight_unit, WeightUnit::Lbs);
    }

    #[test]
    fn test_live_updates_recompute_on_input() {
        let settings = CalculatorSettings {
            live_updates: true,
            ..CalculatorSettings::default()
        };
        let mut calculator = Calculator::new(settings);
        calculator.apply(input(Field::Weight, "70")).unwrap();
        assert!(calculator.report().is_none());

        calculator.apply(input(Field::Height, "175")).unwrap();
        assert_eq!(calculator.report().unwrap().bmi.computed().unwrap().value, 22.9);

        calculator.apply(input(Field::Weight, "90")).unwrap();
        calculator.apply(input(Field::Height, "170")).unwrap();
        assert_eq!(calculator.report().unwrap().bmi.computed().unwrap().value, 31.1);

        calculator.apply(input(Field::Height, "")).unwrap();
        assert!(calculator.report().is_none());
    }

    #[test]
    fn test_inputs_without_live_updates_keep_previous_report() {
        let mut calculator = Calculator::default();
        filled(&mut calculator);
        calculator.apply(CalculatorEvent::Calculate).unwrap();
        calculator.apply(input(Field::Weight, "90")).unwrap();
        assert_eq!(calculator.report().unwrap().bmi.computed().unwrap().value, 22.9);
    }
}
