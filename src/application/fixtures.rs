//! Shared test fixtures for application-layer tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryCatalog, InMemorySelectionRepository, InMemoryWizardStateStore,
};
use crate::domain::catalog::{Application, BusinessProcess, FunctionTree};
use crate::domain::foundation::{ApplicationId, BusinessProcessId, SessionId, TermId, UserId};

pub fn sales() -> BusinessProcessId {
    BusinessProcessId::new("sales").unwrap()
}

pub fn support() -> BusinessProcessId {
    BusinessProcessId::new("support").unwrap()
}

pub fn user() -> UserId {
    UserId::new("user-1").unwrap()
}

pub fn session() -> SessionId {
    SessionId::new("session-1").unwrap()
}

/// Sales: Leads(1) -> {10, 11}, Quotes(2) -> {20}. Support: Tickets(3) -> {30}.
pub fn catalog() -> InMemoryCatalog {
    let sales_tree = FunctionTree::builder(sales())
        .category(TermId::new(1), "Leads")
        .function(TermId::new(1), TermId::new(10), "Lead capture")
        .function(TermId::new(1), TermId::new(11), "Lead scoring")
        .category(TermId::new(2), "Quotes")
        .function(TermId::new(2), TermId::new(20), "Quote templates")
        .build();
    let support_tree = FunctionTree::builder(support())
        .category(TermId::new(3), "Tickets")
        .function(TermId::new(3), TermId::new(30), "Ticket inbox")
        .build();

    InMemoryCatalog::with_data(
        vec![
            (BusinessProcess::new(sales(), "Sales functions"), sales_tree),
            (BusinessProcess::new(support(), "Support functions"), support_tree),
        ],
        vec![
            Application::new(ApplicationId::new("alpha").unwrap(), "Alpha CRM")
                .with_functions(sales(), [TermId::new(10), TermId::new(11)]),
            Application::new(ApplicationId::new("beta").unwrap(), "Beta CRM")
                .with_functions(sales(), [TermId::new(10)])
                .with_functions(support(), [TermId::new(30)]),
        ],
    )
}

/// In-memory adapters wired together.
pub struct Fixture {
    pub catalog: Arc<InMemoryCatalog>,
    pub selections: Arc<InMemorySelectionRepository>,
    pub states: Arc<InMemoryWizardStateStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(catalog()),
            selections: Arc::new(InMemorySelectionRepository::new()),
            states: Arc::new(InMemoryWizardStateStore::new()),
        }
    }
}
