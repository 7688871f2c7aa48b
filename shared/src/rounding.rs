//! Display precision for computed metrics
//!
//! Every metric is rounded once, right after the formula runs, and every
//! classification looks at the rounded value. Ties round half away from zero
//! on the decimal value of the input (`0.25` -> `0.3`, `0.125` -> `0.13`).

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for BMI values
pub const BMI_DECIMALS: u32 = 1;

/// Decimal places for body fat percentages
pub const BODY_FAT_DECIMALS: u32 = 1;

/// Decimal places for waist-to-hip and waist-to-height ratios
pub const RATIO_DECIMALS: u32 = 2;

/// Round `value` to `decimals` places, half away from zero.
///
/// Returns `None` for NaN, infinities and magnitudes a `Decimal` cannot hold.
pub fn round_half_away(value: f64, decimals: u32) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}
