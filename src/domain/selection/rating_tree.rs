//! Extraction of per-business-process weights from a selection.

use std::collections::BTreeMap;

use crate::domain::foundation::BusinessProcessId;

use super::{Selection, WeightAssignment, RATING_FIELD_PREFIX};

/// Weight assignments keyed by business process.
///
/// Only processes with at least one recorded weight are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingTree(BTreeMap<BusinessProcessId, WeightAssignment>);

impl RatingTree {
    /// Builds the tree from the selection's `rates_*` fields.
    pub fn from_selection(selection: &Selection) -> Self {
        let mut tree = BTreeMap::new();
        for (field, entries) in selection.rating_fields() {
            let Some(suffix) = field.strip_prefix(RATING_FIELD_PREFIX) else {
                continue;
            };
            if entries.is_empty() {
                continue;
            }
            let Ok(business_process) = BusinessProcessId::new(suffix) else {
                continue;
            };
            tree.insert(business_process, entries.iter().copied().collect());
        }
        Self(tree)
    }

    pub fn get(&self, business_process: &BusinessProcessId) -> Option<&WeightAssignment> {
        self.0.get(business_process)
    }

    pub fn business_processes(&self) -> impl Iterator<Item = &BusinessProcessId> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BusinessProcessId, &WeightAssignment)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
