//! StartWizardHandler - Command handler for beginning a selection run.

use tracing::info;

use crate::domain::foundation::{BusinessProcessId, SessionId, UserId};
use crate::domain::wizard::{StepForm, StepHandler, WizardState};

use super::{WizardContext, WizardError};

/// Command to start the wizard for a set of business processes.
#[derive(Debug, Clone)]
pub struct StartWizardCommand {
    pub user_id: UserId,
    pub session_id: SessionId,
    /// Chosen processes, in the order their steps should appear.
    pub business_processes: Vec<BusinessProcessId>,
}

/// Result of starting the wizard.
#[derive(Debug, Clone)]
pub struct StartWizardResult {
    /// The first step, ready to render.
    pub form: StepForm,
}

/// Handler for starting wizard runs.
///
/// Any run already stored for the session is replaced, provided it
/// belongs to the same user.
pub struct StartWizardHandler {
    context: WizardContext,
}

impl StartWizardHandler {
    pub fn new(context: WizardContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, cmd: StartWizardCommand) -> Result<StartWizardResult, WizardError> {
        // 1. Refuse to overwrite another user's run
        self.context.load(&cmd.user_id, &cmd.session_id).await?;

        // 2. Build the steps and a fresh state
        let sequence = self.context.sequence(&cmd.business_processes).await?;
        let state = WizardState::start(cmd.user_id.clone(), cmd.business_processes, &sequence);

        // 3. Persist and render the first step
        self.context.save(&cmd.session_id, &state).await?;
        let step = self.context.active_step(&state, &sequence).await?;

        info!(
            user_id = %cmd.user_id,
            session_id = %cmd.session_id,
            steps = sequence.len(),
            "Wizard started"
        );

        Ok(StartWizardResult {
            form: step.render(&state, &sequence),
        })
    }
}
