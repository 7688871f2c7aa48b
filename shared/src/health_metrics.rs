//! Health metrics calculations module
//!
//! BMI computation, classification and the gauge position used to draw it.
//! Body fat and circumference ratios live in [`crate::body_composition`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Rounded Once**: Values are rounded right after the formula, and
//!    categories are looked up on the rounded value
//! 3. **Data-Driven**: Categories come from ordered threshold tables
//! 4. **No Sentinels**: Invalid input yields [`Unavailable`], never 0 or NaN

use crate::errors::{MetricResult, Unavailable};
use crate::measurements::Field;
use crate::rounding::{round_half_away, BMI_DECIMALS};
use crate::thresholds::ThresholdTable;
use crate::validation::require_positive;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Shared Types
// ============================================================================

/// Gender selecting the formula variant and category thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender. Must be one of: male, female (got {})", s)),
        }
    }
}

/// Display text attached to a category
pub trait CategoryLabel: Copy {
    /// Plain label, e.g. "Normal weight"
    fn label(&self) -> &'static str;

    /// Decoration shown after the label in the UI
    fn emoji(&self) -> &'static str;

    /// Label with or without the trailing emoji
    fn display_label(&self, with_emoji: bool) -> String {
        if with_emoji && !self.emoji().is_empty() {
            format!("{} {}", self.label(), self.emoji())
        } else {
            self.label().to_string()
        }
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// BMI bands, lower bound inclusive
pub const BMI_TABLE: ThresholdTable<BmiCategory> = ThresholdTable::new(
    &[
        (18.5, BmiCategory::Underweight),
        (25.0, BmiCategory::Normal),
        (30.0, BmiCategory::Overweight),
    ],
    BmiCategory::Obese,
);

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// BMI range `[lower, upper)` for this category
    pub fn range(&self) -> (f64, f64) {
        BMI_TABLE.range(*self).unwrap_or((0.0, f64::INFINITY))
    }

    /// Health advice shown under the gauge
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "You may need to gain weight. Consult a nutritionist.",
            BmiCategory::Normal => "Great! You're in a healthy weight range!",
            BmiCategory::Overweight => "Consider increasing physical activity.",
            BmiCategory::Obese => "Consult a healthcare professional.",
        }
    }

    /// Band colour on the gauge
    pub fn color_hex(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#3498db",
            BmiCategory::Normal => "#2ecc71",
            BmiCategory::Overweight => "#f39c12",
            BmiCategory::Obese => "#e74c3c",
        }
    }

    /// Caption printed under the band
    pub fn range_caption(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "<18.5",
            BmiCategory::Normal => "18.5-24.9",
            BmiCategory::Overweight => "25-29.9",
            BmiCategory::Obese => "≥30",
        }
    }

    /// Short band name printed under the gauge
    pub fn band_name(&self) -> &'static str {
        match self {
            BmiCategory::Normal => "Normal",
            other => other.label(),
        }
    }
}

impl CategoryLabel for BmiCategory {
    fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    fn emoji(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "😟",
            BmiCategory::Normal => "😊",
            BmiCategory::Overweight => "😐",
            BmiCategory::Obese => "😔",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn advice(&self) -> &'static str {
        self.category.advice()
    }

    pub fn chart_position(&self) -> f64 {
        bmi_chart_position(self.value)
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to one decimal place.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> MetricResult<f64> {
    let weight_kg = require_positive(Field::Weight, weight_kg)?;
    let height_m = require_positive(Field::Height, height_cm)? / 100.0;
    round_half_away(weight_kg / (height_m * height_m), BMI_DECIMALS).ok_or(Unavailable::OutOfRange)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BMI_TABLE.classify(bmi)
}

/// Calculate complete BMI result
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> MetricResult<BmiResult> {
    let value = compute_bmi(weight_kg, height_cm)?;
    Ok(BmiResult {
        value,
        category: classify_bmi(value),
    })
}

// ============================================================================
// BMI Gauge
// ============================================================================

/// BMI at which the gauge indicator reaches the right edge
pub const BMI_GAUGE_MAX: f64 = 40.0;

/// Map a BMI to a 0-100 position on a four-band gauge.
///
/// Each category occupies a quarter of the gauge and positions are linear
/// within a band. The obese band spans BMI 30-40; anything above is pinned
/// to 100.
pub fn bmi_chart_position(bmi: f64) -> f64 {
    let position = if bmi < 18.5 {
        (bmi / 18.5) * 25.0
    } else if bmi < 25.0 {
        25.0 + ((bmi - 18.5) / 6.5) * 25.0
    } else if bmi < 30.0 {
        50.0 + ((bmi - 25.0) / 5.0) * 25.0
    } else {
        75.0 + ((bmi - 30.0) / (BMI_GAUGE_MAX - 30.0)) * 25.0
    };
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, 100.0)
}

/// Everything a UI needs to draw the BMI gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiGauge {
    /// Indicator position, 0-100
    pub position: f64,
    pub label: &'static str,
    pub advice: &'static str,
    pub color: &'static str,
}

impl From<&BmiResult> for BmiGauge {
    fn from(result: &BmiResult) -> Self {
        Self {
            position: result.chart_position(),
            label: result.category.label(),
            advice: result.category.advice(),
            color: result.category.color_hex(),
        }
    }
}
