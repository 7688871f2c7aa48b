//! Error types for the BMI+ metrics engine
//!
//! Missing or invalid measurements are not failures of the calculator: they
//! make a single metric unavailable and leave the others untouched.

use crate::measurements::Field;
use serde::Serialize;
use thiserror::Error;

/// Reason a metric could not be computed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unavailable {
    #[error("{field} is required")]
    Missing { field: Field },

    #[error("{field} must be a positive number")]
    NotPositive { field: Field },

    #[error("Waist must be larger than neck")]
    WaistNotAboveNeck,

    #[error("Measurements are outside the range the formula supports")]
    OutOfRange,
}

impl Unavailable {
    pub fn missing(field: Field) -> Self {
        Unavailable::Missing { field }
    }

    pub fn not_positive(field: Field) -> Self {
        Unavailable::NotPositive { field }
    }
}

/// Result of a single metric computation
pub type MetricResult<T> = Result<T, Unavailable>;
