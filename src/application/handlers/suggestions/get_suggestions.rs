//! GetSuggestionsHandler - Query handler for a selection's ranked suggestions.

use std::sync::Arc;

use tracing::debug;

use crate::application::SuggestionPass;
use crate::domain::foundation::{DomainError, SelectionId, UserId};
use crate::domain::scoring::{RankingPolicy, Suggestions};
use crate::ports::{ApplicationRepository, SelectionRepository, TaxonomyProvider};

use super::load_owned_selection;

/// Query for the suggestions of one selection.
#[derive(Debug, Clone)]
pub struct GetSuggestionsQuery {
    pub user_id: UserId,
    pub selection_id: SelectionId,
}

/// Error type for the suggestion queries.
#[derive(Debug, Clone)]
pub enum SuggestionsError {
    /// Selection not found.
    SelectionNotFound(SelectionId),
    /// Domain error (ownership or port failure).
    Domain(DomainError),
}

impl std::fmt::Display for SuggestionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionsError::SelectionNotFound(id) => write!(f, "Selection not found: {}", id),
            SuggestionsError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SuggestionsError {}

impl From<DomainError> for SuggestionsError {
    fn from(err: DomainError) -> Self {
        SuggestionsError::Domain(err)
    }
}

/// Handler for suggestion queries.
pub struct GetSuggestionsHandler {
    selection_repository: Arc<dyn SelectionRepository>,
    taxonomy: Arc<dyn TaxonomyProvider>,
    application_repository: Arc<dyn ApplicationRepository>,
    policy: RankingPolicy,
}

impl GetSuggestionsHandler {
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
        query: GetSuggestionsQuery,
    ) -> Result<Suggestions, SuggestionsError> {
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
        let suggestions = pass.calculate_suggestions().await?;

        debug!(
            selection_id = %query.selection_id,
            business_processes = suggestions.len(),
            "Suggestions calculated"
        );
        Ok(suggestions)
    }
}
