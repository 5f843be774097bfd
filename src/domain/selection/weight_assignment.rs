//! Per-business-process weight assignments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{TermId, Weight};

/// One recorded weight for a category or function term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub term: TermId,
    pub weight: Weight,
}

impl RateEntry {
    pub fn new(term: TermId, weight: Weight) -> Self {
        Self { term, weight }
    }
}

/// Map of term id to weight for one business process.
///
/// Absent terms read as weight 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightAssignment(BTreeMap<TermId, Weight>);

impl WeightAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for a term, zero when absent.
    pub fn weight_of(&self, term: TermId) -> Weight {
        self.0.get(&term).copied().unwrap_or(Weight::ZERO)
    }

    /// Records a weight. Later entries for the same term win.
    pub fn set(&mut self, term: TermId, weight: Weight) {
        self.0.insert(term, weight);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, Weight)> + '_ {
        self.0.iter().map(|(t, w)| (*t, *w))
    }
}

impl FromIterator<RateEntry> for WeightAssignment {
    fn from_iter<I: IntoIterator<Item = RateEntry>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for entry in iter {
            assignment.set(entry.term, entry.weight);
        }
        assignment
    }
}

impl FromIterator<(TermId, Weight)> for WeightAssignment {
    fn from_iter<I: IntoIterator<Item = (TermId, Weight)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
