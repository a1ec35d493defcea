//! Grade requirement engine
//!
//! Given the scores of the first two assessment components, computes the
//! minimum score needed on the third component to finish the course with the
//! passing average.
//!
//! Weights are fixed: 30% / 35% / 35%. The passing threshold is 3.0 on a
//! 0-5 scale. Everything here is pure: no state, no I/O.

mod score;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use score::{is_valid_score_text, AssessmentScore};

/// Weight of the first assessment component
pub const FIRST_WEIGHT: f64 = 0.30;

/// Weight of the second assessment component
pub const SECOND_WEIGHT: f64 = 0.35;

/// Weight of the third (pending) assessment component
pub const THIRD_WEIGHT: f64 = 0.35;

/// Final weighted average needed to pass
pub const PASSING_THRESHOLD: f64 = 3.0;

/// Highest score an assessment component can receive
pub const MAX_SCORE: f64 = 5.0;

/// Slack allowed when comparing against [`MAX_SCORE`].
///
/// Two-decimal inputs whose exact requirement is 5.00 can compute as
/// 5.000000000000001 in binary floating point (e.g. 0.13 and 3.46).
const CLASSIFY_EPSILON: f64 = 1e-9;

/// Outcome of a required-grade calculation
///
/// Exactly one of three classes. `Required` always holds a value in
/// (0.0, 5.0] rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum RequiredGrade {
    /// No achievable third score reaches the threshold
    Impossible,
    /// The first two components already reach the threshold
    AlreadyPassed,
    /// Minimum third score needed
    Required(f64),
}

impl RequiredGrade {
    /// Numeric view of the outcome: `Some(0.0)` for already passed,
    /// `None` for impossible.
    pub fn value(&self) -> Option<f64> {
        match self {
            RequiredGrade::Impossible => None,
            RequiredGrade::AlreadyPassed => Some(0.0),
            RequiredGrade::Required(v) => Some(*v),
        }
    }

    /// Stable identifier used in storage and JSON output
    pub fn status(&self) -> &'static str {
        match self {
            RequiredGrade::Impossible => "impossible",
            RequiredGrade::AlreadyPassed => "already_passed",
            RequiredGrade::Required(_) => "required",
        }
    }

    pub fn is_impossible(&self) -> bool {
        matches!(self, RequiredGrade::Impossible)
    }

    pub fn is_already_passed(&self) -> bool {
        matches!(self, RequiredGrade::AlreadyPassed)
    }
}

impl fmt::Display for RequiredGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredGrade::Impossible => write!(f, "impossible"),
            RequiredGrade::AlreadyPassed => write!(f, "already passed"),
            RequiredGrade::Required(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Round to two decimal places, half away from zero.
///
/// Operates on the binary value scaled by 100, so `3.125` (exactly
/// representable) becomes `3.13`, while `2.675` (stored slightly below)
/// may land either side depending on how the scaling rounds.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted contribution of the first two components
pub fn weighted_partial(first: f64, second: f64) -> f64 {
    first * FIRST_WEIGHT + second * SECOND_WEIGHT
}

/// Compute the minimum third score needed to reach [`PASSING_THRESHOLD`].
///
/// Inputs are expected in [0, 5]; the caller validates them (see
/// [`is_valid_score_text`]). Out-of-range inputs give a consistent but
/// meaningless result. Never panics and never returns NaN: a NaN
/// requirement is reported as `Impossible`.
pub fn compute_required_grade(first: f64, second: f64) -> RequiredGrade {
    let remaining = PASSING_THRESHOLD - weighted_partial(first, second);
    let required = remaining / THIRD_WEIGHT;

    if required.is_nan() || required > MAX_SCORE + CLASSIFY_EPSILON {
        return RequiredGrade::Impossible;
    }

    if required < 0.0 {
        return RequiredGrade::AlreadyPassed;
    }

    let rounded = round_to_hundredths(required);
    if rounded <= 0.0 {
        // Under half a hundredth still reads as 0.00
        return RequiredGrade::AlreadyPassed;
    }

    RequiredGrade::Required(rounded.min(MAX_SCORE))
}

/// Typed wrapper over [`compute_required_grade`]
pub fn compute_required_grade_for(
    first: AssessmentScore,
    second: AssessmentScore,
) -> RequiredGrade {
    compute_required_grade(first.value(), second.value())
}
