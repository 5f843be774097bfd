//! Wizard module - Multi-step collection of weighted requirements.
//!
//! # Components
//!
//! - `StepSequence` - Ordered steps: chosen business processes, then metadata
//! - `WizardState` - Persisted per-session progress and draft selection
//! - `WizardStep` - Closed set of steps implementing `StepHandler`
//! - `WizardMachine` - Applies cancel/back/next to the active step

mod action;
mod form;
mod machine;
mod sequence;
mod state;
mod step;

pub use action::WizardAction;
pub use form::{
    FieldError, FormAction, FormElement, RangeField, StepForm, SubmittedValues, TextField,
    STEP_TITLE_PREFIX,
};
pub use machine::{WizardMachine, WizardTransition};
pub use sequence::{StepDefinition, StepId, StepSequence, METADATA_STEP_TITLE};
pub use state::WizardState;
pub use step::{
    BusinessProcessStep, MetadataStep, StepHandler, WizardStep, TITLE_REQUIRED_MESSAGE,
};
