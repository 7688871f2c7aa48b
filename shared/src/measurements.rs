//! Measurement records and the raw input form they are parsed from

use crate::errors::{MetricResult, Unavailable};
use crate::health_metrics::Gender;
use crate::units::{LengthUnit, WeightUnit};
use crate::validation::{parse_age, parse_measurement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input field of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Weight,
    Height,
    Age,
    Neck,
    Waist,
    Hip,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Weight,
        Field::Height,
        Field::Age,
        Field::Neck,
        Field::Waist,
        Field::Hip,
    ];

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Weight => "Weight",
            Field::Height => "Height",
            Field::Age => "Age",
            Field::Neck => "Neck circumference",
            Field::Waist => "Waist circumference",
            Field::Hip => "Hip circumference",
        }
    }

    /// Unit the engine expects for this field
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Weight => "kg",
            Field::Age => "years",
            Field::Height | Field::Neck | Field::Waist | Field::Hip => "cm",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Field::Weight),
            "height" => Ok(Field::Height),
            "age" => Ok(Field::Age),
            "neck" => Ok(Field::Neck),
            "waist" => Ok(Field::Waist),
            "hip" | "hips" => Ok(Field::Hip),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// Which metrics a calculation covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// BMI only
    #[default]
    Basic,
    /// BMI plus body fat, waist-to-hip and waist-to-height ratios
    Advanced,
}

impl AnalysisMode {
    pub fn from_flag(advanced: bool) -> Self {
        if advanced {
            AnalysisMode::Advanced
        } else {
            AnalysisMode::Basic
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self, AnalysisMode::Advanced)
    }
}

/// Validated measurements in engine units (kg, cm)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Shown back to the user; no formula depends on it
    pub age_years: Option<u32>,
    pub gender: Gender,
    pub neck_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}

impl Measurements {
    pub fn new(weight_kg: f64, height_cm: f64, gender: Gender) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years: None,
            gender,
            neck_cm: None,
            waist_cm: None,
            hip_cm: None,
        }
    }

    pub fn with_circumferences(mut self, neck_cm: Option<f64>, waist_cm: Option<f64>, hip_cm: Option<f64>) -> Self {
        self.neck_cm = neck_cm;
        self.waist_cm = waist_cm;
        self.hip_cm = hip_cm;
        self
    }
}

/// Raw text of every input field plus the units it was typed in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub neck: String,
    pub waist: String,
    pub hip: String,
    pub weight_unit: WeightUnit,
    pub length_unit: LengthUnit,
}

impl MeasurementForm {
    pub fn with_units(weight_unit: WeightUnit, length_unit: LengthUnit) -> Self {
        Self {
            weight_unit,
            length_unit,
            ..Self::default()
        }
    }

    /// Replace the text of one field
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        *self.slot_mut(field) = text.into();
    }

    /// Current text of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Weight => &self.weight,
            Field::Height => &self.height,
            Field::Age => &self.age,
            Field::Neck => &self.neck,
            Field::Waist => &self.waist,
            Field::Hip => &self.hip,
        }
    }

    /// Clear every field, keeping the unit preferences
    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.slot_mut(field).clear();
        }
    }

    /// Parsed value of a length or weight field in engine units
    pub fn value(&self, field: Field) -> Option<f64> {
        let raw = parse_measurement(self.get(field))?;
        Some(match field {
            Field::Weight => self.weight_unit.to_kg(raw),
            Field::Age => raw,
            Field::Height | Field::Neck | Field::Waist | Field::Hip => self.length_unit.to_cm(raw),
        })
    }

    /// Parse the form into engine measurements.
    ///
    /// Weight and height are required; everything else may be absent.
    pub fn to_measurements(&self, gender: Gender) -> MetricResult<Measurements> {
        let weight_kg = self.value(Field::Weight).ok_or(Unavailable::missing(Field::Weight))?;
        let height_cm = self.value(Field::Height).ok_or(Unavailable::missing(Field::Height))?;

        Ok(Measurements {
            weight_kg,
            height_cm,
            age_years: parse_age(&self.age),
            gender,
            neck_cm: self.value(Field::Neck),
            waist_cm: self.value(Field::Waist),
            hip_cm: self.value(Field::Hip),
        })
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::Age => &mut self.age,
            Field::Neck => &mut self.neck,
            Field::Waist => &mut self.waist,
            Field::Hip => &mut self.hip,
        }
    }
}
