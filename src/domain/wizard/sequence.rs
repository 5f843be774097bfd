//! StepSequence - Ordering of wizard steps.
//!
//! One business-process step per chosen process known to the taxonomy,
//! in the order chosen, followed by the fixed metadata step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::BusinessProcessId;

/// Title of the closing metadata step.
pub const METADATA_STEP_TITLE: &str = "Final step";

/// Identifies a wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum StepId {
    BusinessProcess(BusinessProcessId),
    Metadata,
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepId::BusinessProcess(id) => write!(f, "{}", id),
            StepId::Metadata => write!(f, "metadata"),
        }
    }
}

/// A step and its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: StepId,
    pub title: String,
}

impl StepDefinition {
    pub fn metadata() -> Self {
        Self {
            id: StepId::Metadata,
            title: METADATA_STEP_TITLE.to_string(),
        }
    }
}

/// Ordered, never-empty list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<StepDefinition>,
}

impl StepSequence {
    /// Builds the sequence from the chosen processes.
    ///
    /// Processes without a name in `names` are dropped, as are repeats.
    pub fn build(
        chosen: &[BusinessProcessId],
        names: &BTreeMap<BusinessProcessId, String>,
    ) -> Self {
        let mut steps: Vec<StepDefinition> = Vec::with_capacity(chosen.len() + 1);
        for id in chosen {
            let Some(name) = names.get(id) else {
                continue;
            };
            let step_id = StepId::BusinessProcess(id.clone());
            if steps.iter().any(|s| s.id == step_id) {
                continue;
            }
            steps.push(StepDefinition {
                id: step_id,
                title: name.clone(),
            });
        }
        steps.push(StepDefinition::metadata());
        Self { steps }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the metadata step is always present.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the 0-based position of a step.
    pub fn position(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|s| &s.id == id)
    }

    pub fn get(&self, id: &StepId) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StepId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the first step.
    pub fn first(&self) -> &StepDefinition {
        &self.steps[0]
    }

    /// Returns the step after `id`, or None at the end or for unknown ids.
    pub fn next(&self, id: &StepId) -> Option<&StepDefinition> {
        self.position(id).and_then(|i| self.steps.get(i + 1))
    }

    /// Returns the step before `id`, or None at the start or for unknown ids.
    pub fn previous(&self, id: &StepId) -> Option<&StepDefinition> {
        match self.position(id) {
            Some(i) if i > 0 => self.steps.get(i - 1),
            _ => None,
        }
    }

    pub fn is_first(&self, id: &StepId) -> bool {
        self.position(id) == Some(0)
    }

    pub fn is_last(&self, id: &StepId) -> bool {
        self.position(id) == Some(self.steps.len() - 1)
    }
}
