//! GetComparisonHandler - Query handler for side-by-side comparison tables.

use std::sync::Arc;

use crate::application::SuggestionPass;
use crate::domain::foundation::{SelectionId, UserId};
use crate::domain::scoring::{ComparisonTable, RankingPolicy};
use crate::ports::{ApplicationRepository, SelectionRepository, TaxonomyProvider};

use super::{load_owned_selection, SuggestionsError};

/// Query for the comparison tables of one selection.
#[derive(Debug, Clone)]
pub struct GetComparisonQuery {
    pub user_id: UserId,
    pub selection_id: SelectionId,
}

/// Handler for comparison queries.
pub struct GetComparisonHandler {
    selection_repository: Arc<dyn SelectionRepository>,
    taxonomy: Arc<dyn TaxonomyProvider>,
    application_repository: Arc<dyn ApplicationRepository>,
    policy: RankingPolicy,
}

impl GetComparisonHandler {
    pub fn new(
        selection_repository: Arc<dyn SelectionRepository>,
        taxonomy: Arc<dyn TaxonomyProvider>,
        application_repository: Arc<dyn ApplicationRepository>,
        policy: RankingPolicy,
    ) -> Self {
        Self {
            selection_repository,
            taxonomy,
            application_repository,
            policy,
        }
    }

    pub async fn handle(
        &self,
        query: GetComparisonQuery,
    ) -> Result<Vec<ComparisonTable>, SuggestionsError> {
        let selection = load_owned_selection(
            &self.selection_repository,
            &query.selection_id,
            &query.user_id,
        )
        .await?;

        let mut pass = SuggestionPass::new(
            self.taxonomy.clone(),
            self.application_repository.clone(),
            self.policy,
            selection,
        );
        Ok(pass.comparison_tables().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{self, Fixture};
    use crate::domain::foundation::{Score, TermId, Weight};
    use crate::domain::selection::{RateEntry, Selection};

    #[tokio::test]
    async fn builds_table_per_suggested_process() {
        let fixture = Fixture::new();
        let mut selection = Selection::draft(fixtures::user());
        selection.set_rates(
            &fixtures::support(),
            vec![
                RateEntry::new(TermId::new(30), Weight::MAX),
                RateEntry::new(TermId::new(3), Weight::MAX),
            ],
        );
        fixture.selections.save(&selection).await.unwrap();

        let tables = GetComparisonHandler::new(
            fixture.selections.clone(),
            fixture.catalog.clone(),
            fixture.catalog.clone(),
            RankingPolicy::new(Score::ZERO, 3),
        )
        .handle(GetComparisonQuery {
            user_id: fixtures::user(),
            selection_id: selection.id(),
        })
        .await
        .unwrap();

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.title, "Support suggestions");
        // alpha has no support functions: 0.00, still above a zero threshold
        let names: Vec<&str> = table
            .columns
            .iter()
            .map(|c| c.application_name.as_str())
            .collect();
        assert_eq!(names, vec!["Beta CRM", "Alpha CRM"]);
        assert_eq!(table.categories[0].choice, "5 - Highly important");
        assert_eq!(table.categories[0].rows[0].supported, vec![true, false]);
    }
}
