//! BMI+ WASM Module
//!
//! WebAssembly bindings so a browser UI can run the same metrics engine as
//! the CLI. Values cross the boundary as plain numbers and strings; reports
//! cross as JSON.

use bmi_plus_shared::{
    AnalysisMode, CalculatorEvent, CalculatorSettings, CategoryLabel, Field, Gender, LengthUnit, Measurements,
    Unavailable, WeightUnit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn gender_of(is_male: bool) -> Gender {
    if is_male {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn to_js(message: impl ToString) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// BMI rounded to one decimal, or undefined when weight or height is not positive
#[wasm_bindgen]
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    bmi_plus_shared::compute_bmi(weight_kg, height_cm).ok()
}

/// Category label for a BMI value, e.g. "Normal weight"
#[wasm_bindgen]
pub fn classify_bmi(bmi: f64) -> String {
    bmi_plus_shared::classify_bmi(bmi).label().to_string()
}

#[wasm_bindgen]
pub fn bmi_advice(bmi: f64) -> String {
    bmi_plus_shared::classify_bmi(bmi).advice().to_string()
}

/// Hex colour of the BMI category band
#[wasm_bindgen]
pub fn bmi_color(bmi: f64) -> String {
    bmi_plus_shared::classify_bmi(bmi).color_hex().to_string()
}

/// Gauge indicator position in percent (0-100)
#[wasm_bindgen]
pub fn bmi_chart_position(bmi: f64) -> f64 {
    bmi_plus_shared::bmi_chart_position(bmi)
}

/// US Navy body fat percentage; `hip_cm` is only used for women
#[wasm_bindgen]
pub fn compute_body_fat(is_male: bool, neck_cm: f64, waist_cm: f64, height_cm: f64, hip_cm: Option<f64>) -> Option<f64> {
    bmi_plus_shared::compute_body_fat(gender_of(is_male), neck_cm, waist_cm, height_cm, hip_cm).ok()
}

/// Why body fat cannot be computed for these inputs, if it cannot
#[wasm_bindgen]
pub fn body_fat_unavailable_reason(
    is_male: bool,
    neck_cm: f64,
    waist_cm: f64,
    height_cm: f64,
    hip_cm: Option<f64>,
) -> Option<String> {
    bmi_plus_shared::compute_body_fat(gender_of(is_male), neck_cm, waist_cm, height_cm, hip_cm)
        .err()
        .map(|reason: Unavailable| reason.to_string())
}

#[wasm_bindgen]
pub fn classify_body_fat(percent: f64, is_male: bool) -> String {
    bmi_plus_shared::classify_body_fat(percent, gender_of(is_male)).label().to_string()
}

#[wasm_bindgen]
pub fn compute_whr(waist_cm: f64, hip_cm: f64) -> Option<f64> {
    bmi_plus_shared::compute_whr(waist_cm, hip_cm).ok()
}

/// Risk label for a waist-to-hip ratio, e.g. "Low Risk 💚"
#[wasm_bindgen]
pub fn classify_whr(ratio: f64, is_male: bool) -> String {
    bmi_plus_shared::classify_whr(ratio, gender_of(is_male)).display_label(true)
}

#[wasm_bindgen]
pub fn compute_whtr(waist_cm: f64, height_cm: f64) -> Option<f64> {
    bmi_plus_shared::compute_whtr(waist_cm, height_cm).ok()
}

#[wasm_bindgen]
pub fn classify_whtr(ratio: f64) -> String {
    bmi_plus_shared::classify_whtr(ratio).display_label(true)
}

/// Full report as JSON for measurements in kg and cm
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn evaluate_json(
    weight_kg: f64,
    height_cm: f64,
    is_male: bool,
    advanced: bool,
    neck_cm: Option<f64>,
    waist_cm: Option<f64>,
    hip_cm: Option<f64>,
) -> Result<String, JsValue> {
    let measurements =
        Measurements::new(weight_kg, height_cm, gender_of(is_male)).with_circumferences(neck_cm, waist_cm, hip_cm);
    let report = bmi_plus_shared::evaluate(&measurements, AnalysisMode::from_flag(advanced));
    report.to_json().map_err(to_js)
}

/// Stateful calculator handle for a form-based UI
#[wasm_bindgen(js_name = Calculator)]
pub struct WasmCalculator {
    inner: bmi_plus_shared::Calculator,
}

#[derive(Serialize)]
struct FormSnapshot<'a> {
    gender: Gender,
    mode: AnalysisMode,
    form: &'a bmi_plus_shared::MeasurementForm,
}

#[wasm_bindgen(js_class = Calculator)]
impl WasmCalculator {
    /// Calculator in kg/cm that recomputes on every input when `live_updates` is set
    #[wasm_bindgen(constructor)]
    pub fn new(live_updates: bool) -> WasmCalculator {
        Self {
            inner: bmi_plus_shared::Calculator::new(CalculatorSettings {
                live_updates,
                ..CalculatorSettings::default()
            }),
        }
    }

    /// Calculator with explicit defaults; units are e.g. "lbs" and "in"
    pub fn with_settings(
        advanced: bool,
        live_updates: bool,
        weight_unit: &str,
        length_unit: &str,
    ) -> Result<WasmCalculator, JsValue> {
        let settings = CalculatorSettings {
            mode: AnalysisMode::from_flag(advanced),
            live_updates,
            weight_unit: weight_unit.parse::<WeightUnit>().map_err(to_js)?,
            length_unit: length_unit.parse::<LengthUnit>().map_err(to_js)?,
        };
        Ok(Self {
            inner: bmi_plus_shared::Calculator::new(settings),
        })
    }

    /// Store the raw text typed into a field ("weight", "height", "age", "neck", "waist", "hip")
    pub fn set_field(&mut self, field: &str, text: &str) -> Result<(), JsValue> {
        let field = field.parse::<Field>().map_err(to_js)?;
        self.apply(CalculatorEvent::Input {
            field,
            text: text.to_string(),
        })
    }

    pub fn set_gender(&mut self, gender: &str) -> Result<(), JsValue> {
        let gender = gender.parse::<Gender>().map_err(to_js)?;
        self.apply(CalculatorEvent::SelectGender(gender))
    }

    pub fn set_advanced(&mut self, advanced: bool) -> Result<(), JsValue> {
        self.apply(CalculatorEvent::SetMode(AnalysisMode::from_flag(advanced)))
    }

    /// Throws the reason when weight or height is missing
    pub fn calculate(&mut self) -> Result<(), JsValue> {
        self.apply(CalculatorEvent::Calculate)
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.apply(CalculatorEvent::Reset)
    }

    pub fn has_report(&self) -> bool {
        self.inner.report().is_some()
    }

    /// Why the form cannot be calculated yet, if anything is missing
    pub fn missing_input(&self) -> Option<String> {
        self.inner.missing_input().map(|reason| reason.to_string())
    }

    /// Last report as JSON, or undefined before a successful calculation
    pub fn report_json(&self) -> Result<Option<String>, JsValue> {
        self.inner.report().map(|report| report.to_json().map_err(to_js)).transpose()
    }

    /// Current form contents, gender and mode as JSON
    pub fn form_json(&self) -> Result<String, JsValue> {
        let snapshot = FormSnapshot {
            gender: self.inner.gender(),
            mode: self.inner.mode(),
            form: self.inner.form(),
        };
        serde_json::to_string(&snapshot).map_err(to_js)
    }
}

impl WasmCalculator {
    fn apply(&mut self, event: CalculatorEvent) -> Result<(), JsValue> {
        self.inner.apply(event).map_err(to_js)
    }
}
