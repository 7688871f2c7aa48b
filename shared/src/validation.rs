//! Input validation for measurement fields
//!
//! Two levels of checking happen here:
//! - parsing raw text, where anything that is not a finite number counts as
//!   "not supplied" rather than zero
//! - guarding formula inputs, where absent or non-positive values make the
//!   metric unavailable
//!
//! Plausibility checks (e.g. a 900 kg weight) never block a calculation; they
//! only produce warnings the presentation layer may show.

use crate::errors::{MetricResult, Unavailable};
use crate::measurements::{Field, Measurements};

/// Parse a user-entered number. Empty, non-numeric and non-finite text is absent.
pub fn parse_measurement(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a user-entered age in whole years
pub fn parse_age(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// Require a finite, strictly positive formula input
pub fn require_positive(field: Field, value: f64) -> MetricResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Unavailable::not_positive(field))
    }
}

/// Require an optional formula input to be present and positive
pub fn require_present(field: Field, value: Option<f64>) -> MetricResult<f64> {
    match value {
        Some(value) => require_positive(field, value),
        None => Err(Unavailable::missing(field)),
    }
}

/// Plausible range for a field in engine units (kg, cm, years)
pub fn plausible_range(field: Field) -> (f64, f64) {
    match field {
        Field::Weight => (20.0, 500.0),
        // Covers infants to tallest recorded humans
        Field::Height => (50.0, 300.0),
        Field::Age => (1.0, 150.0),
        Field::Neck => (15.0, 100.0),
        Field::Waist | Field::Hip => (30.0, 300.0),
    }
}

/// Check that a value sits inside the plausible range for its field
pub fn validate_plausible(field: Field, value: f64) -> Result<(), ValidationError> {
    let (min, max) = plausible_range(field);
    let unit = field.unit();
    if value < min {
        return Err(ValidationError::new(field, &format!("must be at least {} {}", min, unit)));
    }
    if value > max {
        return Err(ValidationError::new(field, &format!("must be at most {} {}", max, unit)));
    }
    Ok(())
}

/// Collect plausibility warnings for every supplied measurement
pub fn plausibility_warnings(measurements: &Measurements) -> Vec<ValidationError> {
    let supplied = [
        (Field::Weight, Some(measurements.weight_kg)),
        (Field::Height, Some(measurements.height_cm)),
        (Field::Age, measurements.age_years.map(f64::from)),
        (Field::Neck, measurements.neck_cm),
        (Field::Waist, measurements.waist_cm),
        (Field::Hip, measurements.hip_cm),
    ];

    supplied
        .into_iter()
        .filter_map(|(field, value)| value.and_then(|v| validate_plausible(field, v).err()))
        .collect()
}

/// Validation warning with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }

    /// Format as user-friendly message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.field.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::Gender;
    use proptest::prelude::*;

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("70"), Some(70.0));
        assert_eq!(parse_measurement(" 175.5 "), Some(175.5));
        assert_eq!(parse_measurement("0"), Some(0.0));
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("   "), None);
        assert_eq!(parse_measurement("seventy"), None);
        assert_eq!(parse_measurement("NaN"), None);
        assert_eq!(parse_measurement("inf"), None);
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30"), Some(30));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("-4"), None);
        assert_eq!(parse_age("thirty"), None);
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(Field::Weight, 70.0), Ok(70.0));
        assert_eq!(require_positive(Field::Weight, 0.0), Err(Unavailable::not_positive(Field::Weight)));
        assert_eq!(require_positive(Field::Height, -1.0), Err(Unavailable::not_positive(Field::Height)));
        assert_eq!(require_positive(Field::Hip, f64::NAN), Err(Unavailable::not_positive(Field::Hip)));
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present(Field::Hip, Some(95.0)), Ok(95.0));
        assert_eq!(require_present(Field::Hip, None), Err(Unavailable::missing(Field::Hip)));
        assert_eq!(require_present(Field::Neck, Some(0.0)), Err(Unavailable::not_positive(Field::Neck)));
    }

    #[test]
    fn test_validate_plausible() {
        assert!(validate_plausible(Field::Height, 170.0).is_ok());
        assert!(validate_plausible(Field::Height, 50.0).is_ok());
        assert!(validate_plausible(Field::Height, 300.0).is_ok());

        let err = validate_plausible(Field::Height, 300.1).unwrap_err();
        assert_eq!(err.user_message(), "Height: must be at most 300 cm");

        let err = validate_plausible(Field::Weight, 10.0).unwrap_err();
        assert_eq!(err.user_message(), "Weight: must be at least 20 kg");
    }

    #[test]
    fn test_plausibility_warnings_skip_absent_fields() {
        let measurements = Measurements {
            weight_kg: 900.0,
            height_cm: 175.0,
            age_years: None,
            gender: Gender::Male,
            neck_cm: None,
            waist_cm: Some(5.0),
            hip_cm: None,
        };
        let warnings = plausibility_warnings(&measurements);
        let fields: Vec<Field> = warnings.iter().map(|w| w.field).collect();
        assert_eq!(fields, vec![Field::Weight, Field::Waist]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_plausible(Field::Height, height).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_plausible(Field::Weight, weight).is_err());
        }

        /// Property: any formatted finite number parses back to itself
        #[test]
        fn prop_parse_measurement_round_trips(value in -1000.0f64..1000.0) {
            prop_assert_eq!(parse_measurement(&value.to_string()), Some(value));
        }
    }
}
