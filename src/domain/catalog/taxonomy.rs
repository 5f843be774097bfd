//! Taxonomy types: business processes, categories and functions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessProcessId, TermId};

/// Vocabulary name that holds shared categories rather than a business process.
pub const RESERVED_CATEGORIES_VOCABULARY: &str = "categories";

/// A top-level requirement area such as "Sales" or "Support".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProcess {
    pub id: BusinessProcessId,
    pub name: String,
}

impl BusinessProcess {
    pub fn new(id: BusinessProcessId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// True for the shared categories vocabulary, which is never a wizard step.
    pub fn is_reserved(&self) -> bool {
        self.id.as_str() == RESERVED_CATEGORIES_VOCABULARY
    }
}

/// A grouping of related functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: TermId,
    pub name: String,
}

impl Category {
    pub fn new(id: TermId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The finest-grained requirement unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub id: TermId,
    pub name: String,
}

impl Function {
    pub fn new(id: TermId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A category together with its functions, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBranch {
    pub category: Category,
    pub functions: Vec<Function>,
}

/// Category -> functions hierarchy for one business process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTree {
    pub business_process: BusinessProcessId,
    pub branches: Vec<CategoryBranch>,
}

impl FunctionTree {
    /// Creates an empty tree.
    pub fn empty(business_process: BusinessProcessId) -> Self {
        Self {
            business_process,
            branches: Vec::new(),
        }
    }

    /// Creates a builder for constructing trees.
    pub fn builder(business_process: BusinessProcessId) -> FunctionTreeBuilder {
        FunctionTreeBuilder::new(business_process)
    }

    /// Returns the branch for a category id.
    pub fn branch(&self, category: TermId) -> Option<&CategoryBranch> {
        self.branches.iter().find(|b| b.category.id == category)
    }

    /// Iterates over all functions in display order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.branches.iter().flat_map(|b| b.functions.iter())
    }

    /// Returns true if the term is a category or function of this tree.
    pub fn contains_term(&self, term: TermId) -> bool {
        self.branches
            .iter()
            .any(|b| b.category.id == term || b.functions.iter().any(|f| f.id == term))
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.branches.len()
    }
}

/// Builder for function trees.
///
/// Functions are attached to the category they reference; categories keep
/// the order in which they were first added.
#[derive(Debug)]
pub struct FunctionTreeBuilder {
    business_process: BusinessProcessId,
    branches: Vec<CategoryBranch>,
}

impl FunctionTreeBuilder {
    pub fn new(business_process: BusinessProcessId) -> Self {
        Self {
            business_process,
            branches: Vec::new(),
        }
    }

    /// Adds a category. Re-adding an existing id only renames it.
    pub fn category(mut self, id: TermId, name: impl Into<String>) -> Self {
        let name = name.into();
        match self.branches.iter_mut().find(|b| b.category.id == id) {
            Some(branch) => branch.category.name = name,
            None => self.branches.push(CategoryBranch {
                category: Category::new(id, name),
                functions: Vec::new(),
            }),
        }
        self
    }

    /// Adds a function under a category, creating an unnamed category if needed.
    pub fn function(mut self, category: TermId, id: TermId, name: impl Into<String>) -> Self {
        let function = Function::new(id, name);
        match self.branches.iter_mut().find(|b| b.category.id == category) {
            Some(branch) => branch.functions.push(function),
            None => self.branches.push(CategoryBranch {
                category: Category::new(category, String::new()),
                functions: vec![function],
            }),
        }
        self
    }

    pub fn build(self) -> FunctionTree {
        FunctionTree {
            business_process: self.business_process,
            branches: self.branches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales() -> BusinessProcessId {
        BusinessProcessId::new("sales").unwrap()
    }

    #[test]
    fn builder_groups_functions_under_categories() {
        let tree = FunctionTree::builder(sales())
            .category(TermId::new(1), "Leads")
            .function(TermId::new(1), TermId::new(10), "Lead capture")
            .category(TermId::new(2), "Quotes")
            .function(TermId::new(2), TermId::new(20), "Quote templates")
            .function(TermId::new(1), TermId::new(11), "Lead scoring")
            .build();

        assert_eq!(tree.category_count(), 2);
        let leads = tree.branch(TermId::new(1)).unwrap();
        assert_eq!(leads.category.name, "Leads");
        assert_eq!(
            leads.functions.iter().map(|f| f.id.value()).collect::<Vec<_>>(),
            vec![10, 11]
        );
    }

    #[test]
    fn function_before_category_creates_placeholder_that_gets_named() {
        let tree = FunctionTree::builder(sales())
            .function(TermId::new(3), TermId::new(30), "Invoicing")
            .category(TermId::new(3), "Billing")
            .build();

        let branch = tree.branch(TermId::new(3)).unwrap();
        assert_eq!(branch.category.name, "Billing");
        assert_eq!(branch.functions.len(), 1);
    }

    #[test]
    fn contains_term_checks_categories_and_functions() {
        let tree = FunctionTree::builder(sales())
            .category(TermId::new(1), "Leads")
            .function(TermId::new(1), TermId::new(10), "Lead capture")
            .build();

        assert!(tree.contains_term(TermId::new(1)));
        assert!(tree.contains_term(TermId::new(10)));
        assert!(!tree.contains_term(TermId::new(99)));
        assert_eq!(tree.functions().count(), 1);
    }

    #[test]
    fn reserved_vocabulary_is_detected() {
        let reserved = BusinessProcess::new(
            BusinessProcessId::new(RESERVED_CATEGORIES_VOCABULARY).unwrap(),
            "Categories",
        );
        assert!(reserved.is_reserved());
        assert!(!BusinessProcess::new(sales(), "Sales").is_reserved());
    }
}
