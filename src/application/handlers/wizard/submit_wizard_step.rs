//! SubmitWizardStepHandler - Command handler for cancel/back/next.
//!
//! Applies the action to the active step and persists the outcome:
//! cancel clears the run, back and next save it, and next on the last
//! step saves the selection and clears the run.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{SelectionId, SessionId, UserId};
use crate::domain::wizard::{
    FieldError, StepForm, StepHandler, SubmittedValues, WizardAction, WizardMachine,
    WizardTransition,
};
use crate::ports::SelectionRepository;

use super::{WizardContext, WizardError};

/// Message returned when a run completes.
pub const COMPLETION_MESSAGE: &str =
    "You have successfully finished software selection! You can find your results below.";

/// Command to submit the active step.
#[derive(Debug, Clone)]
pub struct SubmitWizardStepCommand {
    pub user_id: UserId,
    pub session_id: SessionId,
    pub action: WizardAction,
    pub values: SubmittedValues,
}

/// Outcome of a submission.
#[derive(Debug, Clone)]
pub enum WizardOutcome {
    /// Run abandoned, nothing saved.
    Cancelled,
    /// Now on another (or the same) step.
    Moved { form: StepForm },
    /// Values rejected; the same step re-rendered.
    Invalid {
        errors: Vec<FieldError>,
        form: StepForm,
    },
    /// Selection saved.
    Completed {
        selection_id: SelectionId,
        message: String,
    },
}

/// Handler for wizard submissions.
pub struct SubmitWizardStepHandler {
    context: WizardContext,
    selection_repository: Arc<dyn SelectionRepository>,
}

impl SubmitWizardStepHandler {
    pub fn new(
        context: WizardContext,
        selection_repository: Arc<dyn SelectionRepository>,
    ) -> Self {
        Self {
            context,
            selection_repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitWizardStepCommand,
    ) -> Result<WizardOutcome, WizardError> {
        // 1. Load the run (ownership checked, stale step reset)
        let (mut state, sequence) = self.context.resume(&cmd.user_id, &cmd.session_id).await?;
        let step = self.context.active_step(&state, &sequence).await?;

        // 2. Apply the action
        let transition =
            WizardMachine::apply(&mut state, &sequence, &step, cmd.action, &cmd.values);

        // 3. Persist according to the transition
        match transition {
            WizardTransition::Cancelled => {
                self.context.clear(&cmd.session_id).await?;
                info!(session_id = %cmd.session_id, "Wizard cancelled");
                Ok(WizardOutcome::Cancelled)
            }
            WizardTransition::Moved(step_id) => {
                self.context.save(&cmd.session_id, &state).await?;
                debug!(
                    session_id = %cmd.session_id,
                    action = %cmd.action,
                    step = %step_id,
                    "Wizard moved"
                );
                let step = self.context.active_step(&state, &sequence).await?;
                Ok(WizardOutcome::Moved {
                    form: step.render(&state, &sequence),
                })
            }
            WizardTransition::Invalid(errors) => {
                debug!(
                    session_id = %cmd.session_id,
                    errors = errors.len(),
                    "Wizard step rejected"
                );
                Ok(WizardOutcome::Invalid {
                    errors,
                    form: step.render(&state, &sequence),
                })
            }
            WizardTransition::Completed(selection) => {
                self.selection_repository.save(&selection).await?;
                self.context.clear(&cmd.session_id).await?;
                info!(
                    session_id = %cmd.session_id,
                    selection_id = %selection.id(),
                    "Selection completed"
                );
                Ok(WizardOutcome::Completed {
                    selection_id: selection.id(),
                    message: COMPLETION_MESSAGE.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{self, Fixture};
    use crate::domain::foundation::{BusinessProcessId, ErrorCode};
    use crate::domain::wizard::{StepId, WizardState};

    fn context(fixture: &Fixture) -> WizardContext {
        WizardContext::new(fixture.catalog.clone(), fixture.states.clone(), "software_advisor")
    }

    async fn started(fixture: &Fixture, processes: Vec<BusinessProcessId>) {
        let ctx = context(fixture);
        let sequence = ctx.sequence(&processes).await.unwrap();
        let state = WizardState::start(fixtures::user(), processes, &sequence);
        ctx.save(&fixtures::session(), &state).await.unwrap();
    }

    fn handler(fixture: &Fixture) -> SubmitWizardStepHandler {
        SubmitWizardStepHandler::new(context(fixture), fixture.selections.clone())
    }

    fn command(action: WizardAction, values: &[(&str, &str)]) -> SubmitWizardStepCommand {
        SubmitWizardStepCommand {
            user_id: fixtures::user(),
            session_id: fixtures::session(),
            action,
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn next_moves_to_following_step() {
        let fixture = Fixture::new();
        started(&fixture, vec![fixtures::sales(), fixtures::support()]).await;

        let outcome = handler(&fixture)
            .handle(command(WizardAction::Next, &[("1", "3"), ("10", "2")]))
            .await
            .unwrap();

        match outcome {
            WizardOutcome::Moved { form } => {
                assert_eq!(form.step_id, StepId::BusinessProcess(fixtures::support()));
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn back_shows_previous_input() {
        let fixture = Fixture::new();
        started(&fixture, vec![fixtures::sales()]).await;
        let handler = handler(&fixture);
        handler
            .handle(command(WizardAction::Next, &[("1", "3"), ("10", "2")]))
            .await
            .unwrap();

        let outcome = handler
            .handle(command(WizardAction::Back, &[]))
            .await
            .unwrap();

        let WizardOutcome::Moved { form } = outcome else {
            panic!("expected move");
        };
        assert_eq!(form.step_id, StepId::BusinessProcess(fixtures::sales()));
        let json = serde_json::to_value(&form.elements[0]).unwrap();
        assert_eq!(json["category"]["default"], 3);
        assert_eq!(json["functions"][0]["default"], 2);
    }

    #[tokio::test]
    async fn invalid_values_keep_step() {
        let fixture = Fixture::new();
        started(&fixture, vec![fixtures::sales()]).await;

        let outcome = handler(&fixture)
            .handle(command(WizardAction::Next, &[("10", "7")]))
            .await
            .unwrap();

        match outcome {
            WizardOutcome::Invalid { errors, form } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(form.step_id, StepId::BusinessProcess(fixtures::sales()));
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn cancel_clears_state_without_saving() {
        let fixture = Fixture::new();
        started(&fixture, vec![fixtures::sales()]).await;

        let outcome = handler(&fixture)
            .handle(command(WizardAction::Cancel, &[]))
            .await
            .unwrap();

        assert!(matches!(outcome, WizardOutcome::Cancelled));
        assert_eq!(fixture.states.state_count().await, 0);
        assert_eq!(fixture.selections.count().await, 0);
    }

    #[tokio::test]
    async fn finishing_saves_selection_and_clears_state() {
        let fixture = Fixture::new();
        started(&fixture, vec![]).await;

        let outcome = handler(&fixture)
            .handle(command(WizardAction::Next, &[("title", "CRM 2026")]))
            .await
            .unwrap();

        let WizardOutcome::Completed { selection_id, message } = outcome else {
            panic!("expected completion");
        };
        assert_eq!(message, COMPLETION_MESSAGE);
        assert_eq!(fixture.states.state_count().await, 0);
        let saved = fixture.selections.find_by_id(&selection_id).await.unwrap().unwrap();
        assert_eq!(saved.title(), "CRM 2026");
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let fixture = Fixture::new();
        started(&fixture, vec![fixtures::sales()]).await;
        let mut cmd = command(WizardAction::Next, &[]);
        cmd.user_id = UserId::new("intruder").unwrap();

        let err = handler(&fixture).handle(cmd).await.unwrap_err();

        assert!(matches!(err, WizardError::Domain(e) if e.code == ErrorCode::Forbidden));
        assert_eq!(fixture.states.state_count().await, 1);
    }
}
