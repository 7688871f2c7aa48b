//! Assembles every metric for one set of measurements
//!
//! Each metric is computed independently: a missing hip makes the
//! waist-to-hip ratio unavailable but leaves BMI and waist-to-height alone.

use crate::body_composition::{
    calculate_body_fat_result, calculate_whr_result, calculate_whtr_result, BodyFatResult,
    RatioResult, WhrRisk, WhtrRisk,
};
use crate::errors::{MetricResult, Unavailable};
use crate::health_metrics::{calculate_bmi_result, BmiGauge, BmiResult, Gender};
use crate::measurements::{AnalysisMode, Field, Measurements};
use crate::validation::require_present;
use serde::Serialize;

pub const NOTE_NAVY_METHOD: &str = "Body fat calculations use the US Navy method.";
pub const NOTE_HIP_FOR_BODY_FAT: &str = "Hip measurement required for accurate body fat calculation.";
pub const NOTE_HIP_FOR_WHR: &str = "Hip measurement required for Waist-to-Hip Ratio.";

/// Either a computed metric or the reason it is missing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome<T> {
    Computed(T),
    Unavailable { reason: Unavailable, message: String },
}

impl<T> MetricOutcome<T> {
    pub fn computed(&self) -> Option<&T> {
        match self {
            MetricOutcome::Computed(value) => Some(value),
            MetricOutcome::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<Unavailable> {
        match self {
            MetricOutcome::Computed(_) => None,
            MetricOutcome::Unavailable { reason, .. } => Some(*reason),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, MetricOutcome::Computed(_))
    }
}

impl<T> From<MetricResult<T>> for MetricOutcome<T> {
    fn from(result: MetricResult<T>) -> Self {
        match result {
            Ok(value) => MetricOutcome::Computed(value),
            Err(reason) => MetricOutcome::Unavailable {
                message: reason.to_string(),
                reason,
            },
        }
    }
}

/// Body fat and circumference ratios
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedMetrics {
    pub body_fat: MetricOutcome<BodyFatResult>,
    pub waist_to_hip: MetricOutcome<RatioResult<WhrRisk>>,
    pub waist_to_height: MetricOutcome<RatioResult<WhtrRisk>>,
    pub notes: Vec<String>,
}

impl AdvancedMetrics {
    /// Whether there is anything worth showing
    pub fn any_computed(&self) -> bool {
        self.body_fat.is_computed() || self.waist_to_hip.is_computed() || self.waist_to_height.is_computed()
    }
}

/// Snapshot of every metric for one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    pub bmi: MetricOutcome<BmiResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_gauge: Option<BmiGauge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedMetrics>,
}

impl MetricsReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Compute every metric the mode asks for
pub fn evaluate(measurements: &Measurements, mode: AnalysisMode) -> MetricsReport {
    let bmi: MetricOutcome<BmiResult> =
        calculate_bmi_result(measurements.weight_kg, measurements.height_cm).into();
    let bmi_gauge = bmi.computed().map(BmiGauge::from);

    let advanced = mode.is_advanced().then(|| evaluate_advanced(measurements));

    MetricsReport {
        gender: measurements.gender,
        age_years: measurements.age_years,
        bmi,
        bmi_gauge,
        advanced,
    }
}

fn evaluate_advanced(m: &Measurements) -> AdvancedMetrics {
    AdvancedMetrics {
        body_fat: body_fat_for(m).into(),
        waist_to_hip: waist_to_hip_for(m).into(),
        waist_to_height: waist_to_height_for(m).into(),
        notes: advanced_notes(m),
    }
}

fn body_fat_for(m: &Measurements) -> MetricResult<BodyFatResult> {
    let neck = require_present(Field::Neck, m.neck_cm)?;
    let waist = require_present(Field::Waist, m.waist_cm)?;
    calculate_body_fat_result(m.gender, neck, waist, m.height_cm, m.hip_cm)
}

fn waist_to_hip_for(m: &Measurements) -> MetricResult<RatioResult<WhrRisk>> {
    let waist = require_present(Field::Waist, m.waist_cm)?;
    let hip = require_present(Field::Hip, m.hip_cm)?;
    calculate_whr_result(waist, hip, m.gender)
}

fn waist_to_height_for(m: &Measurements) -> MetricResult<RatioResult<WhtrRisk>> {
    let waist = require_present(Field::Waist, m.waist_cm)?;
    calculate_whtr_result(waist, m.height_cm)
}

fn advanced_notes(m: &Measurements) -> Vec<String> {
    let mut notes = vec![NOTE_NAVY_METHOD.to_string()];
    if m.hip_cm.is_none() {
        if m.gender == Gender::Female {
            notes.push(NOTE_HIP_FOR_BODY_FAT.to_string());
        }
        notes.push(NOTE_HIP_FOR_WHR.to_string());
    }
    notes
}
