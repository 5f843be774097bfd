//! Score value object: a percentage (0-100) with exactly two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A match score between 0.00 and 100.00 inclusive.
///
/// Stored as hundredths of a percent so two scores compare exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(u16);

impl Score {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(10_000);

    /// Creates a score from a ratio (0.0 to 1.0), rounding to two decimals.
    ///
    /// Values outside the range are clamped; NaN becomes zero.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self::ZERO;
        }
        let hundredths = (ratio.clamp(0.0, 1.0) * 10_000.0).round();
        Self(hundredths as u16)
    }

    /// Creates a score from a percentage, rounding up to the next hundredth.
    ///
    /// Used for thresholds: every score at or above the result is also at or
    /// above `percent`. Values outside 0-100 are clamped; NaN becomes zero.
    pub fn from_percent_ceil(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        let hundredths = percent.clamp(0.0, 100.0) * 100.0;
        let nearest = hundredths.round();
        // 1.1 * 100.0 is 110.00000000000001
        let hundredths = if (hundredths - nearest).abs() < 1e-6 {
            nearest
        } else {
            hundredths.ceil()
        };
        Self(hundredths as u16)
    }

    /// Creates a score from a percentage value, returning error if out of range.
    pub fn try_from_percent(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "score",
                format!("{} is not between 0 and 100", value),
            ));
        }
        Ok(Self::from_ratio(value / 100.0))
    }

    /// Returns the percentage as a float (e.g. `33.33`).
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns the score in hundredths of a percent (e.g. `3333`).
    pub fn hundredths(&self) -> u16 {
        self.0
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_percent(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.as_f64()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ratio_rounds_to_two_decimals() {
        assert_eq!(Score::from_ratio(1.0 / 3.0).hundredths(), 3333);
        assert_eq!(Score::from_ratio(2.0 / 3.0).hundredths(), 6667);
        assert_eq!(Score::from_ratio(1.0), Score::HUNDRED);
    }

    #[test]
    fn from_ratio_clamps_out_of_range_values() {
        assert_eq!(Score::from_ratio(1.5), Score::HUNDRED);
        assert_eq!(Score::from_ratio(-0.5), Score::ZERO);
        assert_eq!(Score::from_ratio(f64::NAN), Score::ZERO);
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Score::from_ratio(1.0 / 3.0).to_string(), "33.33");
        assert_eq!(Score::HUNDRED.to_string(), "100.00");
        assert_eq!(Score::from_ratio(0.05).to_string(), "5.00");
        assert_eq!(Score::ZERO.to_string(), "0.00");
    }

    #[test]
    fn from_percent_ceil_rounds_up_extra_decimals() {
        assert_eq!(Score::from_percent_ceil(33.334).hundredths(), 3334);
        assert_eq!(Score::from_percent_ceil(33.331).hundredths(), 3334);
        assert_eq!(Score::from_percent_ceil(75.5).hundredths(), 7550);
        assert_eq!(Score::from_percent_ceil(1.1).hundredths(), 110);
        assert_eq!(Score::from_percent_ceil(0.57).hundredths(), 57);
        assert_eq!(Score::from_percent_ceil(100.0), Score::HUNDRED);
    }

    #[test]
    fn from_percent_ceil_clamps_and_handles_nan() {
        assert_eq!(Score::from_percent_ceil(150.0), Score::HUNDRED);
        assert_eq!(Score::from_percent_ceil(-3.0), Score::ZERO);
        assert_eq!(Score::from_percent_ceil(f64::NAN), Score::ZERO);
    }

    #[test]
    fn try_from_percent_rejects_out_of_range() {
        assert!(Score::try_from_percent(100.01).is_err());
        assert!(Score::try_from_percent(-1.0).is_err());
        assert_eq!(Score::try_from_percent(42.5).unwrap().hundredths(), 4250);
    }

    #[test]
    fn serializes_as_percentage_number() {
        let json = serde_json::to_string(&Score::from_ratio(0.5)).unwrap();
        assert_eq!(json, "50.0");
        let score: Score = serde_json::from_str("33.33").unwrap();
        assert_eq!(score.hundredths(), 3333);
    }

    #[test]
    fn ordering_follows_value() {
        assert!(Score::from_ratio(0.25) < Score::from_ratio(0.75));
    }
}
