//! Score text validation and the validated score type

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UninotasError};

/// 0-4 with up to two decimals, or 5 with only zero decimals.
/// `\d` is limited to ASCII so "２" or Arabic-Indic digits are rejected.
const SCORE_PATTERN: &str = r"^(?:[0-4](?:\.[0-9]{1,2})?|5(?:\.0{1,2})?)$";

static SCORE_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn score_regex() -> Option<&'static Regex> {
    SCORE_RE
        .get_or_init(|| match Regex::new(SCORE_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(error = %e, "score pattern failed to compile");
                None
            }
        })
        .as_ref()
}

/// Check that raw text is a score in [0, 5] with at most two decimals.
///
/// Dot separator only, no sign, no surrounding whitespace.
pub fn is_valid_score_text(raw: &str) -> bool {
    score_regex().is_some_and(|re| re.is_match(raw))
}

/// A validated assessment score, stored as exact hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct AssessmentScore(u16);

impl AssessmentScore {
    /// Highest score, in hundredths
    pub const MAX_HUNDREDTHS: u16 = 500;

    /// Parse raw user text, rejecting anything [`is_valid_score_text`] rejects
    pub fn parse(raw: &str) -> Result<Self> {
        if !is_valid_score_text(raw) {
            return Err(UninotasError::InvalidScore {
                text: raw.to_string(),
            });
        }

        let invalid = || UninotasError::InvalidScore {
            text: raw.to_string(),
        };
        let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
        let whole: u16 = whole.parse().map_err(|_| invalid())?;
        let frac: u16 = format!("{:0<2}", frac).parse().map_err(|_| invalid())?;

        Ok(AssessmentScore(whole * 100 + frac))
    }

    /// Build from hundredths (e.g. 270 for 2.70)
    pub fn from_hundredths(hundredths: u16) -> Option<Self> {
        (hundredths <= Self::MAX_HUNDREDTHS).then_some(AssessmentScore(hundredths))
    }

    pub fn hundredths(&self) -> u16 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl FromStr for AssessmentScore {
    type Err = UninotasError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AssessmentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<AssessmentScore> for f64 {
    fn from(score: AssessmentScore) -> f64 {
        score.value()
    }
}

impl TryFrom<f64> for AssessmentScore {
    type Error = String;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        let scaled = (value * 100.0).round();
        if !(0.0..=f64::from(Self::MAX_HUNDREDTHS)).contains(&scaled) {
            return Err(format!("score out of range: {}", value));
        }
        if (scaled / 100.0 - value).abs() > 1e-9 {
            return Err(format!("score has more than two decimals: {}", value));
        }
        Ok(AssessmentScore(scaled as u16))
    }
}
