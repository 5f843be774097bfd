//! Persisted state of an in-progress wizard run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessProcessId, OwnedByUser, UserId};
use crate::domain::selection::Selection;

use super::{StepId, StepSequence};

/// Wizard state for one browsing session.
///
/// Carries the draft selection until the final step saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    active_step: StepId,
    business_processes: Vec<BusinessProcessId>,
    selection: Selection,
    user: UserId,
}

impl WizardState {
    /// Starts a run on the first step of the sequence.
    pub fn start(
        user: UserId,
        business_processes: Vec<BusinessProcessId>,
        sequence: &StepSequence,
    ) -> Self {
        Self {
            active_step: sequence.first().id.clone(),
            business_processes,
            selection: Selection::draft(user.clone()),
            user,
        }
    }

    pub fn active_step(&self) -> &StepId {
        &self.active_step
    }

    pub fn business_processes(&self) -> &[BusinessProcessId] {
        &self.business_processes
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Moves to another step.
    pub fn move_to(&mut self, step: StepId) {
        self.active_step = step;
    }

    /// Resets the active step to the first one if the sequence no longer has it.
    ///
    /// Returns true when a reset happened.
    pub fn reconcile(&mut self, sequence: &StepSequence) -> bool {
        if sequence.contains(&self.active_step) {
            return false;
        }
        self.active_step = sequence.first().id.clone();
        true
    }
}

impl OwnedByUser for WizardState {
    fn owner_id(&self) -> &UserId {
        &self.user
    }
}
