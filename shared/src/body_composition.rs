//! Body composition metrics from circumference measurements
//!
//! - Body fat percentage (US Navy method)
//! - Waist-to-hip ratio (WHR)
//! - Waist-to-height ratio (WHtR)
//!
//! All circumferences and heights are in centimetres.

use crate::errors::{MetricResult, Unavailable};
use crate::health_metrics::{CategoryLabel, Gender};
use crate::measurements::Field;
use crate::rounding::{round_half_away, BODY_FAT_DECIMALS, RATIO_DECIMALS};
use crate::thresholds::ThresholdTable;
use crate::validation::{require_positive, require_present};
use serde::{Deserialize, Serialize};

// ============================================================================
// Body Fat (US Navy method)
// ============================================================================

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

pub const BODY_FAT_MALE: ThresholdTable<BodyFatCategory> = ThresholdTable::new(
    &[
        (6.0, BodyFatCategory::EssentialFat),
        (14.0, BodyFatCategory::Athletes),
        (18.0, BodyFatCategory::Fitness),
        (25.0, BodyFatCategory::Average),
    ],
    BodyFatCategory::Obese,
);

pub const BODY_FAT_FEMALE: ThresholdTable<BodyFatCategory> = ThresholdTable::new(
    &[
        (14.0, BodyFatCategory::EssentialFat),
        (21.0, BodyFatCategory::Athletes),
        (25.0, BodyFatCategory::Fitness),
        (32.0, BodyFatCategory::Average),
    ],
    BodyFatCategory::Obese,
);

impl BodyFatCategory {
    /// Body fat range `[lower, upper)` for this category by gender
    pub fn range(&self, gender: Gender) -> (f64, f64) {
        body_fat_table(gender)
            .range(*self)
            .unwrap_or((0.0, f64::INFINITY))
    }
}

impl CategoryLabel for BodyFatCategory {
    fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }

    fn emoji(&self) -> &'static str {
        ""
    }
}

/// Body fat calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFatResult {
    /// Percentage rounded to one decimal place
    pub percent: f64,
    pub category: BodyFatCategory,
}

fn body_fat_table(gender: Gender) -> &'static ThresholdTable<BodyFatCategory> {
    match gender {
        Gender::Male => &BODY_FAT_MALE,
        Gender::Female => &BODY_FAT_FEMALE,
    }
}

/// Estimate body fat percentage with the US Navy circumference method
///
/// Men: BF% = 495 / (1.0324 - 0.19077 × log10(waist - neck) + 0.15456 × log10(height)) - 450
/// Women: BF% = 495 / (1.29579 - 0.35004 × log10(waist + hip - neck) + 0.22100 × log10(height)) - 450
///
/// The hip measurement is only used (and only required) for women. The
/// waist must be larger than the neck for either formula.
pub fn compute_body_fat(
    gender: Gender,
    neck_cm: f64,
    waist_cm: f64,
    height_cm: f64,
    hip_cm: Option<f64>,
) -> MetricResult<f64> {
    let neck = require_positive(Field::Neck, neck_cm)?;
    let waist = require_positive(Field::Waist, waist_cm)?;
    let height = require_positive(Field::Height, height_cm)?;

    if waist <= neck {
        return Err(Unavailable::WaistNotAboveNeck);
    }

    let density = match gender {
        Gender::Male => 1.0324 - 0.19077 * (waist - neck).log10() + 0.15456 * height.log10(),
        Gender::Female => {
            let hip = require_present(Field::Hip, hip_cm)?;
            1.29579 - 0.35004 * (waist + hip - neck).log10() + 0.22100 * height.log10()
        }
    };
    if !density.is_finite() || density <= 0.0 {
        return Err(Unavailable::OutOfRange);
    }

    round_half_away(495.0 / density - 450.0, BODY_FAT_DECIMALS).ok_or(Unavailable::OutOfRange)
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, gender: Gender) -> BodyFatCategory {
    body_fat_table(gender).classify(body_fat_percent)
}

/// Calculate complete body fat result
pub fn calculate_body_fat_result(
    gender: Gender,
    neck_cm: f64,
    waist_cm: f64,
    height_cm: f64,
    hip_cm: Option<f64>,
) -> MetricResult<BodyFatResult> {
    let percent = compute_body_fat(gender, neck_cm, waist_cm, height_cm, hip_cm)?;
    Ok(BodyFatResult {
        percent,
        category: classify_body_fat(percent, gender),
    })
}

// ============================================================================
// Circumference Ratios
// ============================================================================

/// Ratio result with a risk level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioResult<R> {
    /// Ratio rounded to two decimal places
    pub value: f64,
    pub risk: R,
}

/// Waist-to-hip ratio risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhrRisk {
    Low,
    Moderate,
    High,
}

pub const WHR_MALE: ThresholdTable<WhrRisk> =
    ThresholdTable::new(&[(0.95, WhrRisk::Low), (1.0, WhrRisk::Moderate)], WhrRisk::High);

pub const WHR_FEMALE: ThresholdTable<WhrRisk> =
    ThresholdTable::new(&[(0.80, WhrRisk::Low), (0.85, WhrRisk::Moderate)], WhrRisk::High);

impl CategoryLabel for WhrRisk {
    fn label(&self) -> &'static str {
        match self {
            WhrRisk::Low => "Low Risk",
            WhrRisk::Moderate => "Moderate Risk",
            WhrRisk::High => "High Risk",
        }
    }

    fn emoji(&self) -> &'static str {
        match self {
            WhrRisk::Low => "💚",
            WhrRisk::Moderate => "🟡",
            WhrRisk::High => "🔴",
        }
    }
}

/// Waist-to-height ratio risk level (same for both genders)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhtrRisk {
    Healthy,
    IncreasedRisk,
    HighRisk,
}

pub const WHTR_TABLE: ThresholdTable<WhtrRisk> = ThresholdTable::new(
    &[(0.5, WhtrRisk::Healthy), (0.6, WhtrRisk::IncreasedRisk)],
    WhtrRisk::HighRisk,
);

impl CategoryLabel for WhtrRisk {
    fn label(&self) -> &'static str {
        match self {
            WhtrRisk::Healthy => "Healthy",
            WhtrRisk::IncreasedRisk => "Increased Risk",
            WhtrRisk::HighRisk => "High Risk",
        }
    }

    fn emoji(&self) -> &'static str {
        match self {
            WhtrRisk::Healthy => "💚",
            WhtrRisk::IncreasedRisk => "🟡",
            WhtrRisk::HighRisk => "🔴",
        }
    }
}

/// Calculate waist-to-hip ratio, rounded to two decimal places
pub fn compute_whr(waist_cm: f64, hip_cm: f64) -> MetricResult<f64> {
    let waist = require_positive(Field::Waist, waist_cm)?;
    let hip = require_positive(Field::Hip, hip_cm)?;
    round_half_away(waist / hip, RATIO_DECIMALS).ok_or(Unavailable::OutOfRange)
}

/// Classify waist-to-hip ratio
pub fn classify_whr(ratio: f64, gender: Gender) -> WhrRisk {
    match gender {
        Gender::Male => WHR_MALE.classify(ratio),
        Gender::Female => WHR_FEMALE.classify(ratio),
    }
}

pub fn calculate_whr_result(waist_cm: f64, hip_cm: f64, gender: Gender) -> MetricResult<RatioResult<WhrRisk>> {
    let value = compute_whr(waist_cm, hip_cm)?;
    Ok(RatioResult {
        value,
        risk: classify_whr(value, gender),
    })
}

/// Calculate waist-to-height ratio, rounded to two decimal places
pub fn compute_whtr(waist_cm: f64, height_cm: f64) -> MetricResult<f64> {
    let waist = require_positive(Field::Waist, waist_cm)?;
    let height = require_positive(Field::Height, height_cm)?;
    round_half_away(waist / height, RATIO_DECIMALS).ok_or(Unavailable::OutOfRange)
}

/// Classify waist-to-height ratio
pub fn classify_whtr(ratio: f64) -> WhtrRisk {
    WHTR_TABLE.classify(ratio)
}

pub fn calculate_whtr_result(waist_cm: f64, height_cm: f64) -> MetricResult<RatioResult<WhtrRisk>> {
    let value = compute_whtr(waist_cm, height_cm)?;
    Ok(RatioResult {
        value,
        risk: classify_whtr(value),
    })
}
