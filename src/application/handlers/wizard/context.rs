//! Shared plumbing for the wizard handlers: state lookup, step sequence
//! reconstruction and step construction.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{BusinessProcessId, DomainError, OwnedByUser, SessionId, UserId};
use crate::domain::wizard::{
    BusinessProcessStep, MetadataStep, StepDefinition, StepId, StepSequence, WizardState,
    WizardStep,
};
use crate::ports::{TaxonomyProvider, WizardStateKey, WizardStateStore};

/// Error type shared by the wizard handlers.
#[derive(Debug, Clone)]
pub enum WizardError {
    /// No wizard run is stored for the session.
    NotStarted(SessionId),
    /// Domain error (ownership, taxonomy or state store failure).
    Domain(DomainError),
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::NotStarted(session) => {
                write!(f, "No wizard in progress for session: {}", session)
            }
            WizardError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WizardError {}

impl From<DomainError> for WizardError {
    fn from(err: DomainError) -> Self {
        WizardError::Domain(err)
    }
}

/// Ports and settings the wizard handlers share.
#[derive(Clone)]
pub struct WizardContext {
    taxonomy: Arc<dyn TaxonomyProvider>,
    state_store: Arc<dyn WizardStateStore>,
    namespace: String,
}

impl WizardContext {
    pub fn new(
        taxonomy: Arc<dyn TaxonomyProvider>,
        state_store: Arc<dyn WizardStateStore>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            taxonomy,
            state_store,
            namespace: namespace.into(),
        }
    }

    pub fn key(&self, session_id: &SessionId) -> WizardStateKey {
        WizardStateKey::new(self.namespace.clone(), session_id.clone())
    }

    /// Builds the step sequence for the chosen processes.
    pub async fn sequence(
        &self,
        chosen: &[BusinessProcessId],
    ) -> Result<StepSequence, DomainError> {
        let names = self.taxonomy.business_process_names().await?;
        Ok(StepSequence::build(chosen, &names))
    }

    /// Loads stored state, rejecting state that belongs to another user.
    pub async fn load(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<WizardState>, DomainError> {
        let Some(state) = self.state_store.load(&self.key(session_id)).await? else {
            return Ok(None);
        };
        if let Err(err) = state.check_ownership(user_id) {
            warn!(
                session_id = %session_id,
                owner = %state.user(),
                requested_by = %user_id,
                "Wizard state owner mismatch"
            );
            return Err(err);
        }
        Ok(Some(state))
    }

    /// Loads the run in progress and its sequence.
    ///
    /// A stale active step is moved back to the first step and saved.
    pub async fn resume(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<(WizardState, StepSequence), WizardError> {
        let mut state = self
            .load(user_id, session_id)
            .await?
            .ok_or_else(|| WizardError::NotStarted(session_id.clone()))?;
        let sequence = self.sequence(state.business_processes()).await?;

        let stale = state.active_step().clone();
        if state.reconcile(&sequence) {
            info!(
                session_id = %session_id,
                stale_step = %stale,
                active_step = %state.active_step(),
                "Stale wizard step reset"
            );
            self.save(session_id, &state).await?;
        }
        Ok((state, sequence))
    }

    /// Creates the handler for a step.
    pub async fn step(&self, definition: &StepDefinition) -> Result<WizardStep, DomainError> {
        match &definition.id {
            StepId::BusinessProcess(id) => {
                let tree = self.taxonomy.function_tree(id).await?;
                Ok(WizardStep::BusinessProcess(BusinessProcessStep::new(
                    definition.clone(),
                    tree,
                )))
            }
            StepId::Metadata => Ok(WizardStep::Metadata(MetadataStep::new(definition.clone()))),
        }
    }

    /// Creates the handler for the active step of a reconciled state.
    pub async fn active_step(
        &self,
        state: &WizardState,
        sequence: &StepSequence,
    ) -> Result<WizardStep, DomainError> {
        let definition = sequence
            .get(state.active_step())
            .unwrap_or_else(|| sequence.first());
        self.step(definition).await
    }

    pub async fn save(
        &self,
        session_id: &SessionId,
        state: &WizardState,
    ) -> Result<(), DomainError> {
        Ok(self.state_store.save(&self.key(session_id), state).await?)
    }

    pub async fn clear(&self, session_id: &SessionId) -> Result<(), DomainError> {
        Ok(self.state_store.clear(&self.key(session_id)).await?)
    }
}
