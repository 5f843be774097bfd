//! Catalog module - Taxonomy and application records supplied by the host CMS.

mod application;
mod taxonomy;

pub use application::Application;
pub use taxonomy::{
    BusinessProcess, Category, CategoryBranch, Function, FunctionTree, FunctionTreeBuilder,
    RESERVED_CATEGORIES_VOCABULARY,
};
