//! Judgment value object for pairwise comparisons (1/9 to 9 reciprocal scale).

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Slack allowed at the scale bounds so `1.0 / 9.0` round-trips.
const SCALE_TOLERANCE: f64 = 1e-9;

/// How many times more important one criterion is than another.
///
/// Values live on the standard AHP reciprocal scale: `1` means equal
/// importance, `9` extreme preference for the first criterion and `1/9`
/// extreme preference for the second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawJudgment", into = "f64")]
pub struct JudgmentValue(f64);

impl JudgmentValue {
    /// Lowest value on the scale.
    pub const MIN: f64 = 1.0 / 9.0;

    /// Highest value on the scale.
    pub const MAX: f64 = 9.0;

    /// Equal importance.
    pub const EQUAL: Self = Self(1.0);

    /// Creates a JudgmentValue, returning error if not on the scale.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite()
            || value < Self::MIN - SCALE_TOLERANCE
            || value > Self::MAX + SCALE_TOLERANCE
        {
            return Err(ValidationError::out_of_range(
                "judgment",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the mirrored judgment (`1 / value`).
    ///
    /// The scale is closed under reciprocals, so this never leaves it.
    pub fn reciprocal(&self) -> Self {
        Self(1.0 / self.0)
    }

    /// Returns true if neither criterion is preferred.
    pub fn is_indifferent(&self) -> bool {
        (self.0 - 1.0).abs() < SCALE_TOLERANCE
    }
}

impl Default for JudgmentValue {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl TryFrom<f64> for JudgmentValue {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<JudgmentValue> for f64 {
    fn from(value: JudgmentValue) -> Self {
        value.0
    }
}

/// Parses plain numbers (`"3"`, `"0.5"`) and fractions (`"1/3"`).
impl FromStr for JudgmentValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(parse_judgment(s)?)
    }
}

/// Parses a number or fraction without checking it against the scale.
pub fn parse_judgment(s: &str) -> Result<f64, ValidationError> {
    let s = s.trim();
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| ValidationError::invalid_format("judgment", format!("'{}': {}", s, e)))
    };

    match s.split_once('/') {
        Some((numerator, denominator)) => {
            let denominator = parse(denominator)?;
            if denominator == 0.0 {
                return Err(ValidationError::invalid_format(
                    "judgment",
                    format!("'{}': zero denominator", s),
                ));
            }
            Ok(parse(numerator)? / denominator)
        }
        None => parse(s),
    }
}

/// Deserializes a number or fraction string, leaving the scale check to the
/// code that knows which criteria pair the value belongs to.
pub fn deserialize_judgment<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawJudgment::deserialize(deserializer)? {
        RawJudgment::Number(value) => Ok(value),
        RawJudgment::Text(text) => parse_judgment(&text).map_err(de::Error::custom),
    }
}

impl fmt::Display for JudgmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1.0 {
            write!(f, "1/{}", round_for_display(1.0 / self.0))
        } else {
            write!(f, "{}", round_for_display(self.0))
        }
    }
}

fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wire form accepted from problem files.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawJudgment {
    Number(f64),
    Text(String),
}

impl TryFrom<RawJudgment> for JudgmentValue {
    type Error = ValidationError;

    fn try_from(raw: RawJudgment) -> Result<Self, Self::Error> {
        match raw {
            RawJudgment::Number(value) => Self::try_new(value),
            RawJudgment::Text(text) => text.parse(),
        }
    }
}
