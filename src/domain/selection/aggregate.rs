//! Selection aggregate.
//!
//! A selection is one user's saved set of weighted requirements. It is
//! built up step by step by the wizard and persisted once the final step
//! is submitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{
    BusinessProcessId, OwnedByUser, SelectionId, Timestamp, UserId, ValidationError,
};

use super::RateEntry;

/// Field-name prefix of the per-business-process rating fields.
pub const RATING_FIELD_PREFIX: &str = "rates_";

/// Returns the rating field name for a business process.
pub fn rating_field_name(business_process: &BusinessProcessId) -> String {
    format!("{}{}", RATING_FIELD_PREFIX, business_process)
}

/// Selection aggregate.
///
/// # Invariants
///
/// - `title` is non-blank once the selection has been saved
/// - rating fields are keyed `rates_<business process>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    id: SelectionId,
    owner: UserId,
    title: String,
    notes: Option<String>,
    rating_fields: BTreeMap<String, Vec<RateEntry>>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Selection {
    /// Creates an empty, untitled selection for the wizard to fill in.
    pub fn draft(owner: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id: SelectionId::new(),
            owner,
            title: String::new(),
            notes: None,
            rating_fields: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SelectionId {
        self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Raw field bag of rating entries.
    pub fn rating_fields(&self) -> &BTreeMap<String, Vec<RateEntry>> {
        &self.rating_fields
    }

    /// Stored entries for a business process, empty if none.
    pub fn rates_for(&self, business_process: &BusinessProcessId) -> &[RateEntry] {
        self.rating_fields
            .get(&rating_field_name(business_process))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the rating field of a business process.
    pub fn set_rates(&mut self, business_process: &BusinessProcessId, entries: Vec<RateEntry>) {
        self.rating_fields
            .insert(rating_field_name(business_process), entries);
        self.touch();
    }

    /// Sets the title, rejecting blank input.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        self.title = title.trim().to_string();
        self.touch();
        Ok(())
    }

    /// Sets the notes; blank notes are stored as none.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl OwnedByUser for Selection {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{TermId, Weight};

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn sales() -> BusinessProcessId {
        BusinessProcessId::new("sales").unwrap()
    }

    #[test]
    fn rating_field_name_uses_prefix() {
        assert_eq!(rating_field_name(&sales()), "rates_sales");
    }

    #[test]
    fn set_rates_replaces_previous_entries() {
        let mut selection = Selection::draft(owner());
        selection.set_rates(
            &sales(),
            vec![RateEntry::new(TermId::new(1), Weight::MAX)],
        );
        selection.set_rates(&sales(), vec![]);

        assert!(selection.rates_for(&sales()).is_empty());
        assert!(selection.rating_fields().contains_key("rates_sales"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut selection = Selection::draft(owner());
        assert!(selection.set_title("   ").is_err());
        selection.set_title(" CRM shortlist ").unwrap();
        assert_eq!(selection.title(), "CRM shortlist");
    }

    #[test]
    fn blank_notes_are_dropped() {
        let mut selection = Selection::draft(owner());
        selection.set_notes(Some("  ".to_string()));
        assert_eq!(selection.notes(), None);
        selection.set_notes(Some("Budget is tight".to_string()));
        assert_eq!(selection.notes(), Some("Budget is tight"));
    }

    #[test]
    fn selection_is_owned_by_its_creator() {
        let selection = Selection::draft(owner());
        assert!(selection.is_owner(&owner()));
        assert!(!selection.is_owner(&UserId::new("other").unwrap()));
    }
}
