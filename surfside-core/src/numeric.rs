//! Small numeric helpers shared by scoring, calibration and data providers.

/// Round `value` to one decimal place, halves towards positive infinity.
///
/// # Examples
/// ```
/// use surfside_core::numeric::round_tenth;
///
/// assert_eq!(round_tenth(1.26), 1.3);
/// assert_eq!(round_tenth(-0.84), -0.8);
/// assert_eq!(round_tenth(-0.25), -0.2);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "one-decimal rounding scales, rounds and rescales"
)]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Replace non-finite readings with `fallback`.
///
/// Producers occasionally emit `NaN` for readings they could not take; the
/// scorer treats those as absent rather than letting them poison a sum.
#[must_use]
pub const fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Clamp a score into `0.0..=max`, mapping non-finite values to `0.0`.
#[must_use]
pub const fn clamp_score(score: f64, max: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, max)
}
