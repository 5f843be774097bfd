//! Suggestion ranking configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scoring::RankingPolicy;

/// Thresholds applied when ranking applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Minimum score, as a percentage, an application needs to be suggested
    #[serde(default = "default_minimum_score")]
    pub minimum_score: f64,

    /// Maximum number of applications suggested per business process
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl ScoringConfig {
    /// Builds the ranking policy. Call after [`ScoringConfig::validate`].
    pub fn policy(&self) -> RankingPolicy {
        RankingPolicy::from_percent(self.minimum_score, self.max_suggestions)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.minimum_score.is_finite() || !(0.0..=100.0).contains(&self.minimum_score) {
            return Err(ValidationError::InvalidMinimumScore);
        }
        if self.max_suggestions == 0 {
            return Err(ValidationError::InvalidMaxSuggestions);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            minimum_score: default_minimum_score(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

fn default_minimum_score() -> f64 {
    RankingPolicy::DEFAULT_MINIMUM_PERCENT
}

fn default_max_suggestions() -> usize {
    RankingPolicy::DEFAULT_MAX_SUGGESTIONS
}
