// ─────────────────────────────────────────────────────────────────────
// DECIDE — Floating Tolerance
// ─────────────────────────────────────────────────────────────────────
//! Tolerance-aware comparisons for computed reals (radius, angle) that
//! are checked against a caller threshold.

/// Absolute tolerance used when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// `|a - b| < DEFAULT_TOLERANCE`.
#[inline]
pub fn almost_equal(a: f64, b: f64) -> bool {
    almost_equal_within(a, b, DEFAULT_TOLERANCE)
}

/// `|a - b| < epsilon`. Strict: a difference of exactly `epsilon` is
/// not "almost equal".
#[inline]
pub fn almost_equal_within(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Strict `value > threshold` that treats values within
/// `DEFAULT_TOLERANCE` of the threshold as not exceeding it.
#[inline]
pub fn exceeds(value: f64, threshold: f64) -> bool {
    value > threshold && !almost_equal(value, threshold)
}
