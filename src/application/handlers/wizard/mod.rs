//! Wizard handlers - Start, render and submit wizard steps.

mod context;
mod get_wizard_step;
mod start_wizard;
mod submit_wizard_step;

pub use context::{WizardContext, WizardError};
pub use get_wizard_step::{GetWizardStepHandler, GetWizardStepQuery};
pub use start_wizard::{StartWizardCommand, StartWizardHandler, StartWizardResult};
pub use submit_wizard_step::{
    SubmitWizardStepCommand, SubmitWizardStepHandler, WizardOutcome, COMPLETION_MESSAGE,
};
