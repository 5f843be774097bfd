//! Application Rater - Weighted multi-category rating of one application.

use std::collections::BTreeSet;

use crate::domain::catalog::FunctionTree;
use crate::domain::foundation::{ApplicationId, Score, TermId};
use crate::domain::selection::WeightAssignment;

use super::ScoringError;

/// Pure rating functions.
pub struct ApplicationRater;

impl ApplicationRater {
    /// Rates an application against one business process.
    ///
    /// # Algorithm
    /// For each category with a non-zero weight `c`:
    /// - `max += Σ(weight[f]) * c / 5` over functions with a non-zero weight
    /// - `rating += Σ(weight[f]) * c / 5` over those the application supports
    ///
    /// Score = `rating / max * 100`, rounded to two decimals.
    ///
    /// # Edge Cases
    /// - Category weight 0 or absent: contributes nothing to either sum
    /// - `max == 0`: `ScoringError::DivisionUndefined`
    pub fn rate_application(
        application: &ApplicationId,
        tree: &FunctionTree,
        weights: &WeightAssignment,
        supported_functions: &BTreeSet<TermId>,
    ) -> Result<Score, ScoringError> {
        let mut rating = 0.0_f64;
        let mut max_rating = 0.0_f64;

        for branch in &tree.branches {
            let category_weight = weights.weight_of(branch.category.id);
            if category_weight.is_zero() {
                continue;
            }

            let mut category_rating = 0u32;
            let mut max_category_rating = 0u32;
            for function in &branch.functions {
                let weight = weights.weight_of(function.id);
                if weight.is_zero() {
                    continue;
                }
                max_category_rating += u32::from(weight.value());
                if supported_functions.contains(&function.id) {
                    category_rating += u32::from(weight.value());
                }
            }

            let factor = category_weight.as_fraction();
            rating += f64::from(category_rating) * factor;
            max_rating += f64::from(max_category_rating) * factor;
        }

        if max_rating == 0.0 {
            return Err(ScoringError::DivisionUndefined {
                application: application.clone(),
                business_process: tree.business_process.clone(),
            });
        }

        Ok(Score::from_ratio(rating / max_rating))
    }
}
