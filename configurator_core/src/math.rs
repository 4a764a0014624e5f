//! Numeric helpers shared by the geometry, BOM and pricing modules.
//!
//! Everything here works on full-precision `f64`. Rounding helpers are meant
//! for the final step of a calculation only.

use crate::units::Degrees;

/// Round to a number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a length, area or volume for display (one decimal).
pub fn round_display(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round a monetary amount to whole currency units.
pub fn round_money(value: f64) -> f64 {
    value.round()
}

/// Roof surface inflation for a pitched roof: `1 / cos(pitch)`.
pub fn slope_factor(pitch: Degrees) -> f64 {
    1.0 / pitch.to_radians().cos()
}

/// Length measured along a slope for a given horizontal run.
pub fn sloped_length(horizontal: f64, pitch: Degrees) -> f64 {
    horizontal / pitch.to_radians().cos()
}

/// Number of members needed to cover `length` at `spacing` (rounded up).
///
/// Non-finite or non-positive input yields zero members.
pub fn count_at_spacing(length: f64, spacing: f64) -> u32 {
    if spacing.is_nan() || spacing <= 0.0 || !length.is_finite() || length <= 0.0 {
        return 0;
    }
    (length / spacing).ceil() as u32
}
