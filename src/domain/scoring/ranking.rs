//! Suggestion ranking: threshold, stable ordering and truncation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ApplicationId, BusinessProcessId, Score};

/// Threshold and size limit applied to every business-process ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingPolicy {
    pub minimum_score: Score,
    pub max_suggestions: usize,
}

impl RankingPolicy {
    pub const DEFAULT_MINIMUM_PERCENT: f64 = 50.0;
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

    pub fn new(minimum_score: Score, max_suggestions: usize) -> Self {
        Self {
            minimum_score,
            max_suggestions,
        }
    }

    /// Builds a policy from a percentage threshold.
    ///
    /// The threshold is rounded up to whole hundredths so no admitted score
    /// falls below `minimum_percent`.
    pub fn from_percent(minimum_percent: f64, max_suggestions: usize) -> Self {
        Self::new(Score::from_percent_ceil(minimum_percent), max_suggestions)
    }
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self::from_percent(Self::DEFAULT_MINIMUM_PERCENT, Self::DEFAULT_MAX_SUGGESTIONS)
    }
}

/// An application and its score for one business process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedApplication {
    pub application_id: ApplicationId,
    pub score: Score,
}

impl RankedApplication {
    pub fn new(application_id: ApplicationId, score: Score) -> Self {
        Self {
            application_id,
            score,
        }
    }
}

/// Ranked applications for one business process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub business_process: BusinessProcessId,
    pub applications: Vec<RankedApplication>,
}

/// All suggestions of a selection, ordered by business process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions(Vec<Suggestion>);

impl Suggestions {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self(suggestions)
    }

    pub fn get(&self, business_process: &BusinessProcessId) -> Option<&Suggestion> {
        self.0.iter().find(|s| &s.business_process == business_process)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Ranking functions.
pub struct SuggestionRanker;

impl SuggestionRanker {
    /// Ranks scored applications.
    ///
    /// Keeps scores at or above the minimum, sorts descending with ties in
    /// input order, then keeps the first `max_suggestions`.
    pub fn rank(
        scores: Vec<RankedApplication>,
        policy: &RankingPolicy,
    ) -> Vec<RankedApplication> {
        let mut ranked: Vec<RankedApplication> = scores
            .into_iter()
            .filter(|r| r.score >= policy.minimum_score)
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(policy.max_suggestions);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ranked(id: &str, percent: f64) -> RankedApplication {
        RankedApplication::new(
            ApplicationId::new(id).unwrap(),
            Score::try_from_percent(percent).unwrap(),
        )
    }

    fn ids(ranking: &[RankedApplication]) -> Vec<&str> {
        ranking.iter().map(|r| r.application_id.as_str()).collect()
    }

    #[test]
    fn default_policy_is_fifty_percent_top_three() {
        let policy = RankingPolicy::default();
        assert_eq!(policy.minimum_score.to_string(), "50.00");
        assert_eq!(policy.max_suggestions, 3);
    }

    #[test]
    fn drops_scores_below_minimum() {
        let ranking = SuggestionRanker::rank(
            vec![ranked("a", 49.99), ranked("b", 50.0), ranked("c", 80.0)],
            &RankingPolicy::default(),
        );
        assert_eq!(ids(&ranking), vec!["c", "b"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranking = SuggestionRanker::rank(
            vec![ranked("first", 75.0), ranked("top", 90.0), ranked("second", 75.0)],
            &RankingPolicy::default(),
        );
        assert_eq!(ids(&ranking), vec!["top", "first", "second"]);
    }

    #[test]
    fn truncates_to_max_suggestions() {
        let policy = RankingPolicy::new(Score::ZERO, 2);
        let ranking = SuggestionRanker::rank(
            vec![ranked("a", 10.0), ranked("b", 30.0), ranked("c", 20.0)],
            &policy,
        );
        assert_eq!(ids(&ranking), vec!["b", "c"]);
    }

    #[test]
    fn suggestions_lookup_by_business_process() {
        let sales = BusinessProcessId::new("sales").unwrap();
        let suggestions = Suggestions::new(vec![Suggestion {
            business_process: sales.clone(),
            applications: vec![ranked("a", 100.0)],
        }]);
        assert_eq!(suggestions.get(&sales).map(|s| s.applications.len()), Some(1));
        assert!(suggestions
            .get(&BusinessProcessId::new("support").unwrap())
            .is_none());
    }

    proptest! {
        #[test]
        fn ranking_respects_policy(
            scores in proptest::collection::vec(0u16..=10_000, 0..20),
            minimum in 0u16..=10_000,
            max in 0usize..6,
        ) {
            let input: Vec<RankedApplication> = scores
                .iter()
                .enumerate()
                .map(|(i, h)| RankedApplication::new(
                    ApplicationId::new(format!("app-{}", i)).unwrap(),
                    Score::from_ratio(f64::from(*h) / 10_000.0),
                ))
                .collect();
            let policy = RankingPolicy::new(Score::from_ratio(f64::from(minimum) / 10_000.0), max);

            let ranking = SuggestionRanker::rank(input, &policy);

            prop_assert!(ranking.len() <= max);
            prop_assert!(ranking.iter().all(|r| r.score >= policy.minimum_score));
            prop_assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }
}
