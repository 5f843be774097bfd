//! SuggestionPass - One request's worth of suggestion computation.
//!
//! Gathers the selection's rating tree, the function trees and the
//! applications' supported functions through the ports, scores every
//! application per business process, and ranks the results.
//!
//! Lookups are memoised on the pass and dropped with it, so one request
//! never asks a port for the same thing twice.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::catalog::{Application, FunctionTree};
use crate::domain::foundation::{
    ApplicationId, BusinessProcessId, DomainError, ErrorCode, TermId,
};
use crate::domain::scoring::{
    ApplicationRater, ComparisonTable, RankedApplication, RankingPolicy, Suggestion,
    SuggestionRanker, Suggestions,
};
use crate::domain::selection::{RatingTree, Selection};
use crate::ports::{ApplicationRepository, TaxonomyProvider};

/// Per-request suggestion calculator.
pub struct SuggestionPass {
    taxonomy: Arc<dyn TaxonomyProvider>,
    application_repository: Arc<dyn ApplicationRepository>,
    policy: RankingPolicy,
    selection: Selection,
    rating_tree: Option<RatingTree>,
    function_trees: HashMap<BusinessProcessId, FunctionTree>,
    applications: Option<Vec<Application>>,
    application_functions: HashMap<(ApplicationId, BusinessProcessId), BTreeSet<TermId>>,
    suggestions: Option<Suggestions>,
}

impl SuggestionPass {
    pub fn new(
        taxonomy: Arc<dyn TaxonomyProvider>,
        application_repository: Arc<dyn ApplicationRepository>,
        policy: RankingPolicy,
        selection: Selection,
    ) -> Self {
        Self {
            taxonomy,
            application_repository,
            policy,
            selection,
            rating_tree: None,
            function_trees: HashMap::new(),
            applications: None,
            application_functions: HashMap::new(),
            suggestions: None,
        }
    }

    /// Ranked suggestions per business process.
    ///
    /// Computed once; later calls return the stored result. Processes where
    /// nothing reaches the minimum score are left out.
    pub async fn calculate_suggestions(&mut self) -> Result<Suggestions, DomainError> {
        if let Some(suggestions) = &self.suggestions {
            return Ok(suggestions.clone());
        }

        let rating_tree = self.rating_tree().clone();
        let applications = self.applications().await?;

        let mut suggestions = Vec::new();
        for (business_process, weights) in rating_tree.iter() {
            let Some(tree) = self.function_tree(business_process).await? else {
                continue;
            };

            let mut scores = Vec::with_capacity(applications.len());
            for application in &applications {
                let supported = self.application_functions(application, business_process);
                match ApplicationRater::rate_application(
                    &application.id,
                    &tree,
                    weights,
                    &supported,
                ) {
                    Ok(score) => scores.push(RankedApplication::new(application.id.clone(), score)),
                    Err(err) => debug!(
                        application_id = %application.id,
                        business_process = %business_process,
                        error = %err,
                        "Application excluded from ranking"
                    ),
                }
            }

            let ranked = SuggestionRanker::rank(scores, &self.policy);
            debug!(
                business_process = %business_process,
                suggested = ranked.len(),
                "Business process ranked"
            );
            if !ranked.is_empty() {
                suggestions.push(Suggestion {
                    business_process: business_process.clone(),
                    applications: ranked,
                });
            }
        }

        let suggestions = Suggestions::new(suggestions);
        self.suggestions = Some(suggestions.clone());
        Ok(suggestions)
    }

    /// Comparison tables for every business process with suggestions.
    pub async fn comparison_tables(&mut self) -> Result<Vec<ComparisonTable>, DomainError> {
        let suggestions = self.calculate_suggestions().await?;
        let names = self.taxonomy.business_process_names().await?;
        let rating_tree = self.rating_tree().clone();
        let applications = self.applications().await?;

        let mut tables = Vec::with_capacity(suggestions.len());
        for suggestion in suggestions.iter() {
            let (Some(tree), Some(weights)) = (
                self.function_tree(&suggestion.business_process).await?,
                rating_tree.get(&suggestion.business_process),
            ) else {
                continue;
            };
            let name = names
                .get(&suggestion.business_process)
                .cloned()
                .unwrap_or_else(|| suggestion.business_process.to_string());
            tables.push(ComparisonTable::build(
                suggestion,
                &name,
                &tree,
                weights,
                &applications,
            ));
        }
        Ok(tables)
    }

    fn rating_tree(&mut self) -> &RatingTree {
        self.rating_tree
            .get_or_insert_with(|| RatingTree::from_selection(&self.selection))
    }

    async fn applications(&mut self) -> Result<Vec<Application>, DomainError> {
        if let Some(applications) = &self.applications {
            return Ok(applications.clone());
        }
        let applications = self.application_repository.find_all().await?;
        self.applications = Some(applications.clone());
        Ok(applications)
    }

    /// Function tree of a process; `None` when the taxonomy no longer has it.
    async fn function_tree(
        &mut self,
        business_process: &BusinessProcessId,
    ) -> Result<Option<FunctionTree>, DomainError> {
        if let Some(tree) = self.function_trees.get(business_process) {
            return Ok(Some(tree.clone()));
        }
        match self.taxonomy.function_tree(business_process).await {
            Ok(tree) => {
                self.function_trees
                    .insert(business_process.clone(), tree.clone());
                Ok(Some(tree))
            }
            Err(err) if err.code == ErrorCode::BusinessProcessNotFound => {
                warn!(
                    business_process = %business_process,
                    selection_id = %self.selection.id(),
                    "Rated business process missing from taxonomy, skipped"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn application_functions(
        &mut self,
        application: &Application,
        business_process: &BusinessProcessId,
    ) -> BTreeSet<TermId> {
        self.application_functions
            .entry((application.id.clone(), business_process.clone()))
            .or_insert_with(|| application.supported_functions(business_process))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures;
    use crate::domain::foundation::{Score, Weight};
    use crate::domain::selection::RateEntry;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingApplications {
        inner: Arc<dyn ApplicationRepository>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ApplicationRepository for CountingApplications {
        async fn find_all(&self) -> Result<Vec<Application>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError> {
            self.inner.find_by_id(id).await
        }
    }

    fn entry(term: u64, weight: u8) -> RateEntry {
        RateEntry::new(TermId::new(term), Weight::try_new(weight).unwrap())
    }

    /// Leads weighted 3 with functions {10: 2, 11: 4}.
    fn sales_selection() -> Selection {
        let mut selection = Selection::draft(fixtures::user());
        selection.set_rates(&fixtures::sales(), vec![entry(10, 2), entry(11, 4), entry(1, 3)]);
        selection
    }

    fn pass(selection: Selection, policy: RankingPolicy) -> SuggestionPass {
        let catalog = Arc::new(fixtures::catalog());
        SuggestionPass::new(catalog.clone(), catalog, policy, selection)
    }

    fn zero_threshold() -> RankingPolicy {
        RankingPolicy::new(Score::ZERO, 10)
    }

    #[tokio::test]
    async fn ranks_sales_example() {
        let mut pass = pass(sales_selection(), zero_threshold());

        let suggestions = pass.calculate_suggestions().await.unwrap();

        let sales = suggestions.get(&fixtures::sales()).unwrap();
        let ranked: Vec<(String, String)> = sales
            .applications
            .iter()
            .map(|r| (r.application_id.to_string(), r.score.to_string()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("alpha".to_string(), "100.00".to_string()),
                ("beta".to_string(), "33.33".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn default_threshold_drops_low_scores() {
        let mut pass = pass(sales_selection(), RankingPolicy::default());
        let suggestions = pass.calculate_suggestions().await.unwrap();
        assert_eq!(suggestions.get(&fixtures::sales()).unwrap().applications.len(), 1);
    }

    #[tokio::test]
    async fn processes_without_weights_are_absent() {
        let mut pass = pass(sales_selection(), zero_threshold());
        let suggestions = pass.calculate_suggestions().await.unwrap();
        assert!(suggestions.get(&fixtures::support()).is_none());
    }

    #[tokio::test]
    async fn second_calculation_is_memoised() {
        let catalog = Arc::new(fixtures::catalog());
        let counting = Arc::new(CountingApplications {
            inner: catalog.clone(),
            calls: AtomicUsize::new(0),
        });
        let mut pass = SuggestionPass::new(
            catalog,
            counting.clone(),
            zero_threshold(),
            sales_selection(),
        );

        let first = pass.calculate_suggestions().await.unwrap();
        let second = pass.calculate_suggestions().await.unwrap();
        let _ = pass.comparison_tables().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_rated_process_is_skipped() {
        let mut selection = sales_selection();
        selection.set_rates(
            &BusinessProcessId::new("retired").unwrap(),
            vec![entry(90, 5), entry(9, 5)],
        );
        let mut pass = pass(selection, zero_threshold());

        let suggestions = pass.calculate_suggestions().await.unwrap();

        assert_eq!(suggestions.len(), 1);
    }

    #[tokio::test]
    async fn comparison_tables_follow_suggestions() {
        let mut pass = pass(sales_selection(), zero_threshold());

        let tables = pass.comparison_tables().await.unwrap();

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].title, "Sales suggestions");
        assert_eq!(tables[0].columns[0].header, "#1 Rank");
        assert_eq!(tables[0].categories[0].rows[1].supported, vec![true, false]);
    }
}
