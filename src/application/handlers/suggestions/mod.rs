//! Suggestion handlers - Ranked applications and comparison tables for a
//! finished selection.

mod get_comparison;
mod get_suggestions;

pub use get_comparison::{GetComparisonHandler, GetComparisonQuery};
pub use get_suggestions::{GetSuggestionsHandler, GetSuggestionsQuery, SuggestionsError};

use std::sync::Arc;

use crate::domain::foundation::{OwnedByUser, SelectionId, UserId};
use crate::domain::selection::Selection;
use crate::ports::SelectionRepository;

/// Loads a selection the user owns.
async fn load_owned_selection(
    repository: &Arc<dyn SelectionRepository>,
    selection_id: &SelectionId,
    user_id: &UserId,
) -> Result<Selection, SuggestionsError> {
    let selection = repository
        .find_by_id(selection_id)
        .await?
        .ok_or(SuggestionsError::SelectionNotFound(*selection_id))?;
    selection.check_ownership(user_id)?;
    Ok(selection)
}
