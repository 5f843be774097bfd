//! Weight value object for requirement importance (0 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance of a category or function: 0 (not needed) to 5 (highly important).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    /// Not needed.
    pub const ZERO: Self = Self(0);

    /// Highest importance.
    pub const MAX: Self = Self(5);

    /// Creates a Weight, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "weight",
                0,
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Parses a submitted form value (`"3"`). Blank input counts as zero.
    pub fn parse_field(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::ZERO);
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| ValidationError::invalid_format(field, "expected an integer"))?;
        if !(0..=i64::from(Self::MAX.0)).contains(&value) {
            return Err(ValidationError::out_of_range(
                field,
                0,
                i32::from(Self::MAX.0),
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for a zero weight.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the weight as a fraction of the maximum (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX.0)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Not needed",
            1 => "Almost unimportant",
            2 => "Slightly important",
            3 => "Important",
            4 => "Very important",
            _ => "Highly important",
        }
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a rate value to its textual label.
///
/// Returns `None` for values outside 0..=5.
pub fn convert_rate_to_text(rate: u8) -> Option<&'static str> {
    Weight::try_new(rate).ok().map(|w| w.label())
}

/// Label prefixed with the rate number, e.g. `"3 - Important"`.
pub fn describe_rate(rate: u8) -> Option<String> {
    convert_rate_to_text(rate).map(|text| format!("{} - {}", rate, text))
}
