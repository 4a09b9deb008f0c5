//! Linear normalization of raw signal values into the `[0, 1]` range.
//!
//! Every function clamps its input into `[min, max]` first, so values outside the
//! range saturate instead of producing scores below 0 or above 1.

use crate::Score;

/// Scores `value` linearly between `min` (0.0) and `max` (1.0).
///
/// A degenerate range (`max <= min`) scores 1.0 once `value` reaches `max`.
pub fn score(min: f64, max: f64, value: f64) -> Score {
    if value.is_nan() {
        return 0.0;
    }
    if max <= min {
        return if value >= max { 1.0 } else { 0.0 };
    }

    let clamped = value.clamp(min, max);
    (clamped - min) / (max - min)
}

/// Inverted linear score: 1.0 at `min`, 0.0 at `max`.
///
/// A degenerate range (`max <= min`) scores 1.0 only while `value` is at or below `min`.
pub fn i_score(min: f64, max: f64, value: f64) -> Score {
    if value.is_nan() {
        return 0.0;
    }
    if max <= min {
        return if value <= min { 1.0 } else { 0.0 };
    }

    let clamped = value.clamp(min, max);
    (max - clamped) / (max - min)
}

/// Zero-based score of `value` relative to `max`.
pub fn z_score(max: f64, value: f64) -> Score {
    score(0.0, max, value)
}
