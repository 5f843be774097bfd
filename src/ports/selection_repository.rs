//! Selection repository port.
//!
//! Finished selections are saved once, when the wizard's last step is
//! submitted, and read back to compute suggestions.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SelectionId};
use crate::domain::selection::Selection;

/// Repository port for Selection aggregate persistence.
#[async_trait]
pub trait SelectionRepository: Send + Sync {
    /// Save a selection, replacing any previous version.
    async fn save(&self, selection: &Selection) -> Result<(), DomainError>;

    /// Find a selection by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SelectionId) -> Result<Option<Selection>, DomainError>;
}
