//! GetWizardStepHandler - Query handler rendering the active wizard step.

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::wizard::{StepForm, StepHandler};

use super::{WizardContext, WizardError};

/// Query for the active step of a session's wizard run.
#[derive(Debug, Clone)]
pub struct GetWizardStepQuery {
    pub user_id: UserId,
    pub session_id: SessionId,
}

/// Handler for rendering the active step.
pub struct GetWizardStepHandler {
    context: WizardContext,
}

impl GetWizardStepHandler {
    pub fn new(context: WizardContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, query: GetWizardStepQuery) -> Result<StepForm, WizardError> {
        let (state, sequence) = self
            .context
            .resume(&query.user_id, &query.session_id)
            .await?;
        let step = self.context.active_step(&state, &sequence).await?;
        Ok(step.render(&state, &sequence))
    }
}
