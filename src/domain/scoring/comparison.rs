//! Comparison table of suggested applications for one business process.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Application, FunctionTree};
use crate::domain::foundation::{describe_rate, ApplicationId, BusinessProcessId, Score, TermId};
use crate::domain::selection::WeightAssignment;

use super::Suggestion;

/// One suggested application column, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonColumn {
    pub rank: usize,
    pub header: String,
    pub application_id: ApplicationId,
    pub application_name: String,
    pub score: Score,
}

/// A chosen function and whether each column supports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub function_id: TermId,
    pub function_name: String,
    pub choice: String,
    pub supported: Vec<bool>,
}

/// A chosen category with its chosen functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCategory {
    pub category_id: TermId,
    pub category_name: String,
    pub choice: String,
    pub rows: Vec<ComparisonRow>,
}

/// Side-by-side view of the suggested applications.
///
/// Only categories and functions the user weighted above zero appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub business_process: BusinessProcessId,
    pub title: String,
    pub columns: Vec<ComparisonColumn>,
    pub categories: Vec<ComparisonCategory>,
}

impl ComparisonTable {
    /// Builds the table for one suggestion.
    ///
    /// `applications` supplies names and supported functions; a ranked id
    /// missing from it gets an empty name and no support.
    pub fn build(
        suggestion: &Suggestion,
        business_process_name: &str,
        tree: &FunctionTree,
        weights: &WeightAssignment,
        applications: &[Application],
    ) -> Self {
        let ranked: Vec<Option<&Application>> = suggestion
            .applications
            .iter()
            .map(|r| applications.iter().find(|a| a.id == r.application_id))
            .collect();

        let columns = suggestion
            .applications
            .iter()
            .zip(&ranked)
            .enumerate()
            .map(|(i, (r, app))| ComparisonColumn {
                rank: i + 1,
                header: rank_header(i + 1),
                application_id: r.application_id.clone(),
                application_name: app.map(|a| a.name.clone()).unwrap_or_default(),
                score: r.score,
            })
            .collect();

        let mut categories = Vec::new();
        for branch in &tree.branches {
            let category_weight = weights.weight_of(branch.category.id);
            if category_weight.is_zero() {
                continue;
            }

            let rows = branch
                .functions
                .iter()
                .filter_map(|function| {
                    let weight = weights.weight_of(function.id);
                    if weight.is_zero() {
                        return None;
                    }
                    Some(ComparisonRow {
                        function_id: function.id,
                        function_name: function.name.clone(),
                        choice: choice_text(weight.value()),
                        supported: ranked
                            .iter()
                            .map(|app| {
                                app.is_some_and(|a| {
                                    a.supports(&suggestion.business_process, function.id)
                                })
                            })
                            .collect(),
                    })
                })
                .collect();

            categories.push(ComparisonCategory {
                category_id: branch.category.id,
                category_name: branch.category.name.clone(),
                choice: choice_text(category_weight.value()),
                rows,
            });
        }

        Self {
            business_process: suggestion.business_process.clone(),
            title: format!(
                "{} suggestions",
                business_process_name.trim_end_matches(" functions")
            ),
            columns,
            categories,
        }
    }
}

/// Column header for a rank, starting at 1.
pub fn rank_header(rank: usize) -> String {
    format!("#{} Rank", rank)
}

fn choice_text(rate: u8) -> String {
    describe_rate(rate).unwrap_or_default()
}
