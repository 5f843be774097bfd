//! Wizard state machine: applies a navigation action to the active step.

use tracing::debug;

use crate::domain::selection::Selection;

use super::{
    FieldError, StepHandler, StepId, StepSequence, SubmittedValues, WizardAction, WizardState,
    WizardStep,
};

/// Result of applying an action. The caller persists accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardTransition {
    /// Run abandoned; state should be cleared.
    Cancelled,
    /// Active step is now the given one; state should be saved.
    Moved(StepId),
    /// Submitted values were rejected; state is unchanged.
    Invalid(Vec<FieldError>),
    /// Last step submitted; the selection should be saved and state cleared.
    Completed(Selection),
}

/// Transition functions.
pub struct WizardMachine;

impl WizardMachine {
    /// Applies `action` to the active `step` of `state`.
    ///
    /// Only `Next` validates. `Back` on the first step stays put.
    pub fn apply(
        state: &mut WizardState,
        sequence: &StepSequence,
        step: &WizardStep,
        action: WizardAction,
        values: &SubmittedValues,
    ) -> WizardTransition {
        match action {
            WizardAction::Cancel => WizardTransition::Cancelled,
            WizardAction::Back => {
                if let Some(previous) = sequence.previous(step.id()) {
                    state.move_to(previous.id.clone());
                } else {
                    debug!(step = %step.id(), "Back on first step ignored");
                }
                WizardTransition::Moved(state.active_step().clone())
            }
            WizardAction::Next => {
                let errors = step.validate(values);
                if !errors.is_empty() {
                    return WizardTransition::Invalid(errors);
                }

                let mut updated = state.clone();
                if let Err(error) = step.submit(values, &mut updated) {
                    return WizardTransition::Invalid(vec![error]);
                }

                match sequence.next(step.id()) {
                    Some(next) => {
                        updated.move_to(next.id.clone());
                        *state = updated;
                        WizardTransition::Moved(state.active_step().clone())
                    }
                    None => {
                        *state = updated;
                        WizardTransition::Completed(state.selection().clone())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::FunctionTree;
    use crate::domain::foundation::{BusinessProcessId, TermId, UserId};
    use crate::domain::wizard::{BusinessProcessStep, MetadataStep, StepDefinition};
    use std::collections::BTreeMap;

    fn bp(name: &str) -> BusinessProcessId {
        BusinessProcessId::new(name).unwrap()
    }

    fn sequence() -> StepSequence {
        let names: BTreeMap<BusinessProcessId, String> =
            [(bp("a"), "A".to_string()), (bp("b"), "B".to_string())]
                .into_iter()
                .collect();
        StepSequence::build(&[bp("a"), bp("b")], &names)
    }

    fn bp_step(name: &str) -> WizardStep {
        let definition = sequence()
            .get(&StepId::BusinessProcess(bp(name)))
            .cloned()
            .unwrap();
        let tree = FunctionTree::builder(bp(name))
            .category(TermId::new(1), "C")
            .function(TermId::new(1), TermId::new(10), "F")
            .build();
        WizardStep::BusinessProcess(BusinessProcessStep::new(definition, tree))
    }

    fn metadata_step() -> WizardStep {
        WizardStep::Metadata(MetadataStep::new(StepDefinition::metadata()))
    }

    fn state() -> WizardState {
        WizardState::start(UserId::new("u").unwrap(), vec![bp("a"), bp("b")], &sequence())
    }

    fn values(pairs: &[(&str, &str)]) -> SubmittedValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn back_from_second_step_returns_to_first() {
        let mut state = state();
        state.move_to(StepId::BusinessProcess(bp("b")));

        let transition = WizardMachine::apply(
            &mut state,
            &sequence(),
            &bp_step("b"),
            WizardAction::Back,
            &values(&[("10", "not-a-number")]),
        );

        assert_eq!(transition, WizardTransition::Moved(StepId::BusinessProcess(bp("a"))));
    }

    #[test]
    fn back_on_first_step_is_a_no_op() {
        let mut state = state();
        let before = state.clone();

        let transition = WizardMachine::apply(
            &mut state,
            &sequence(),
            &bp_step("a"),
            WizardAction::Back,
            &values(&[]),
        );

        assert_eq!(transition, WizardTransition::Moved(StepId::BusinessProcess(bp("a"))));
        assert_eq!(state, before);
    }

    #[test]
    fn next_advances_and_records_weights() {
        let mut state = state();
        let transition = WizardMachine::apply(
            &mut state,
            &sequence(),
            &bp_step("a"),
            WizardAction::Next,
            &values(&[("1", "4"), ("10", "5")]),
        );

        assert_eq!(transition, WizardTransition::Moved(StepId::BusinessProcess(bp("b"))));
        assert_eq!(state.selection().rates_for(&bp("a")).len(), 2);
    }

    #[test]
    fn invalid_next_leaves_state_untouched() {
        let mut state = state();
        let before = state.clone();

        let transition = WizardMachine::apply(
            &mut state,
            &sequence(),
            &bp_step("a"),
            WizardAction::Next,
            &values(&[("1", "9")]),
        );

        assert!(matches!(transition, WizardTransition::Invalid(ref e) if e.len() == 1));
        assert_eq!(state, before);
    }

    #[test]
    fn cancel_never_validates() {
        let mut state = state();
        state.move_to(StepId::Metadata);
        let transition = WizardMachine::apply(
            &mut state,
            &sequence(),
            &metadata_step(),
            WizardAction::Cancel,
            &values(&[]),
        );
        assert_eq!(transition, WizardTransition::Cancelled);
    }

    #[test]
    fn next_on_last_step_completes_with_selection() {
        let mut state = state();
        state.move_to(StepId::Metadata);

        let transition = WizardMachine::apply(
            &mut state,
            &sequence(),
            &metadata_step(),
            WizardAction::Next,
            &values(&[("title", "My CRM search")]),
        );

        match transition {
            WizardTransition::Completed(selection) => {
                assert_eq!(selection.title(), "My CRM search");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }
}
