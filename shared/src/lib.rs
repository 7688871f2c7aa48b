//! BMI+ Shared Library
//!
//! The metrics engine behind every BMI+ front end: pure BMI, body fat and
//! circumference-ratio calculations, their category tables, and the
//! calculator state that presentation layers drive with events.

pub mod body_composition;
pub mod calculator;
pub mod errors;
pub mod health_metrics;
pub mod measurements;
pub mod report;
pub mod rounding;
pub mod thresholds;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use body_composition::*;
pub use calculator::{Calculator, CalculatorEvent, CalculatorSettings};
pub use errors::*;
pub use health_metrics::*;
pub use measurements::{AnalysisMode, Field, MeasurementForm, Measurements};
pub use report::{evaluate, AdvancedMetrics, MetricOutcome, MetricsReport};
pub use units::*;
