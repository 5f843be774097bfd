//! Step behaviour: rendering, validation and submission.

use crate::domain::catalog::FunctionTree;
use crate::domain::foundation::{TermId, Weight};
use crate::domain::selection::{RateEntry, WeightAssignment};

use super::{
    FieldError, FormElement, RangeField, StepDefinition, StepForm, StepId, StepSequence,
    SubmittedValues, TextField, WizardState,
};

/// Message shown when the metadata step is submitted without a title.
pub const TITLE_REQUIRED_MESSAGE: &str = "Title field is required.";

/// Capability shared by all wizard steps.
pub trait StepHandler {
    /// Describes the step as a form, defaults taken from the draft selection.
    fn render(&self, state: &WizardState, sequence: &StepSequence) -> StepForm;

    /// Checks submitted values. Empty means valid.
    fn validate(&self, values: &SubmittedValues) -> Vec<FieldError>;

    /// Writes validated values into the draft selection.
    fn submit(&self, values: &SubmittedValues, state: &mut WizardState) -> Result<(), FieldError>;
}

/// Collects weights for one business process.
#[derive(Debug, Clone)]
pub struct BusinessProcessStep {
    definition: StepDefinition,
    tree: FunctionTree,
}

impl BusinessProcessStep {
    pub fn new(definition: StepDefinition, tree: FunctionTree) -> Self {
        Self { definition, tree }
    }

    fn field_name(term: TermId) -> String {
        term.to_string()
    }

    /// Weight posted for a term; missing, blank or invalid reads as zero.
    fn submitted_weight(values: &SubmittedValues, term: TermId) -> Weight {
        values
            .get(&Self::field_name(term))
            .and_then(|raw| Weight::parse_field(&Self::field_name(term), raw).ok())
            .unwrap_or(Weight::ZERO)
    }
}

impl StepHandler for BusinessProcessStep {
    fn render(&self, state: &WizardState, sequence: &StepSequence) -> StepForm {
        let stored: WeightAssignment = state
            .selection()
            .rates_for(&self.tree.business_process)
            .iter()
            .copied()
            .collect();

        let elements = self
            .tree
            .branches
            .iter()
            .map(|branch| FormElement::CategoryGroup {
                category: RangeField::weight(
                    Self::field_name(branch.category.id),
                    branch.category.name.clone(),
                    stored.weight_of(branch.category.id),
                ),
                functions: branch
                    .functions
                    .iter()
                    .map(|f| {
                        RangeField::weight(
                            Self::field_name(f.id),
                            f.name.clone(),
                            stored.weight_of(f.id),
                        )
                    })
                    .collect(),
            })
            .collect();

        StepForm::new(
            self.definition.id.clone(),
            &self.definition.title,
            sequence,
            elements,
        )
    }

    fn validate(&self, values: &SubmittedValues) -> Vec<FieldError> {
        values
            .iter()
            .filter(|(name, _)| {
                name.parse::<TermId>()
                    .is_ok_and(|term| self.tree.contains_term(term))
            })
            .filter_map(|(name, raw)| {
                Weight::parse_field(name, raw)
                    .err()
                    .map(|e| FieldError::new(name.clone(), e.to_string()))
            })
            .collect()
    }

    /// Replaces the process's rating field.
    ///
    /// A category is kept only when its header and at least one of its
    /// functions are non-zero; its non-zero functions come first, then the
    /// category itself.
    fn submit(&self, values: &SubmittedValues, state: &mut WizardState) -> Result<(), FieldError> {
        let mut entries = Vec::new();
        for branch in &self.tree.branches {
            let category_weight = Self::submitted_weight(values, branch.category.id);
            if category_weight.is_zero() {
                continue;
            }
            let functions: Vec<RateEntry> = branch
                .functions
                .iter()
                .map(|f| RateEntry::new(f.id, Self::submitted_weight(values, f.id)))
                .filter(|entry| !entry.weight.is_zero())
                .collect();
            if functions.is_empty() {
                continue;
            }
            entries.extend(functions);
            entries.push(RateEntry::new(branch.category.id, category_weight));
        }

        state
            .selection_mut()
            .set_rates(&self.tree.business_process, entries);
        Ok(())
    }
}

/// Collects the selection title and notes.
#[derive(Debug, Clone)]
pub struct MetadataStep {
    definition: StepDefinition,
}

impl MetadataStep {
    pub fn new(definition: StepDefinition) -> Self {
        Self { definition }
    }
}

impl StepHandler for MetadataStep {
    fn render(&self, state: &WizardState, sequence: &StepSequence) -> StepForm {
        let selection = state.selection();
        let elements = vec![
            FormElement::Text(TextField {
                name: "title".to_string(),
                label: "Title".to_string(),
                description:
                    "Enter name of your selection, you can find it later in your selections list."
                        .to_string(),
                multiline: false,
                required: true,
                default: selection.title().to_string(),
            }),
            FormElement::Text(TextField {
                name: "notes".to_string(),
                label: "Notes".to_string(),
                description: "Enter notes to describe your selection project.".to_string(),
                multiline: true,
                required: false,
                default: selection.notes().unwrap_or_default().to_string(),
            }),
        ];
        StepForm::new(
            self.definition.id.clone(),
            &self.definition.title,
            sequence,
            elements,
        )
    }

    fn validate(&self, values: &SubmittedValues) -> Vec<FieldError> {
        let title = values.get("title").map(|t| t.trim()).unwrap_or_default();
        if title.is_empty() {
            return vec![FieldError::new("title", TITLE_REQUIRED_MESSAGE)];
        }
        Vec::new()
    }

    fn submit(&self, values: &SubmittedValues, state: &mut WizardState) -> Result<(), FieldError> {
        let selection = state.selection_mut();
        selection
            .set_title(values.get("title").cloned().unwrap_or_default())
            .map_err(|_| FieldError::new("title", TITLE_REQUIRED_MESSAGE))?;
        selection.set_notes(values.get("notes").cloned());
        Ok(())
    }
}

/// Closed set of wizard steps.
#[derive(Debug, Clone)]
pub enum WizardStep {
    BusinessProcess(BusinessProcessStep),
    Metadata(MetadataStep),
}

impl WizardStep {
    pub fn id(&self) -> &StepId {
        match self {
            WizardStep::BusinessProcess(step) => &step.definition.id,
            WizardStep::Metadata(step) => &step.definition.id,
        }
    }
}

impl StepHandler for WizardStep {
    fn render(&self, state: &WizardState, sequence: &StepSequence) -> StepForm {
        match self {
            WizardStep::BusinessProcess(step) => step.render(state, sequence),
            WizardStep::Metadata(step) => step.render(state, sequence),
        }
    }

    fn validate(&self, values: &SubmittedValues) -> Vec<FieldError> {
        match self {
            WizardStep::BusinessProcess(step) => step.validate(values),
            WizardStep::Metadata(step) => step.validate(values),
        }
    }

    fn submit(&self, values: &SubmittedValues, state: &mut WizardState) -> Result<(), FieldError> {
        match self {
            WizardStep::BusinessProcess(step) => step.submit(values, state),
            WizardStep::Metadata(step) => step.submit(values, state),
        }
    }
}
