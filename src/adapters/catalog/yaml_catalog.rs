//! YAML Catalog Adapter
//!
//! Loads the taxonomy and the candidate applications from one YAML file.
//! Categories are a shared vocabulary; each function names the category it
//! belongs to.
//!
//! ```yaml
//! categories:
//!   - { id: 1, name: Leads }
//! business_processes:
//!   - name: Sales functions          # id defaults to the machine name
//!     functions:
//!       - { id: 10, name: Lead capture, category: 1 }
//! applications:
//!   - id: crm-one
//!     name: CRM One
//!     functions:
//!       sales_functions: [10]
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::adapters::memory::InMemoryCatalog;
use crate::domain::catalog::{Application, BusinessProcess, FunctionTree};
use crate::domain::foundation::{
    ApplicationId, BusinessProcessId, DomainError, ErrorCode, TermId,
};
use crate::ports::{ApplicationRepository, TaxonomyProvider};

/// Errors that can occur while loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("IO error reading {path}: {reason}")]
    IoError { path: String, reason: String },

    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl From<CatalogLoadError> for DomainError {
    fn from(err: CatalogLoadError) -> Self {
        DomainError::new(ErrorCode::CatalogError, err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<TermDocument>,
    #[serde(default)]
    business_processes: Vec<BusinessProcessDocument>,
    #[serde(default)]
    applications: Vec<Application>,
}

#[derive(Debug, Deserialize)]
struct TermDocument {
    id: TermId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct BusinessProcessDocument {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    functions: Vec<FunctionDocument>,
}

#[derive(Debug, Deserialize)]
struct FunctionDocument {
    id: TermId,
    name: String,
    category: TermId,
}

/// Parsed catalog contents.
type CatalogData = (Vec<(BusinessProcess, FunctionTree)>, Vec<Application>);

/// Catalog backed by a YAML file
#[derive(Debug, Clone)]
pub struct YamlCatalog {
    inner: InMemoryCatalog,
}

impl YamlCatalog {
    /// Load a catalog file
    ///
    /// # Example
    /// ```ignore
    /// let catalog = YamlCatalog::load("./data/catalog.yaml").await?;
    /// ```
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| CatalogLoadError::IoError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let (processes, applications) = parse_catalog(&yaml)?;
        info!(
            path = %path.display(),
            business_processes = processes.len(),
            applications = applications.len(),
            "Catalog loaded"
        );
        Ok(Self {
            inner: InMemoryCatalog::with_data(processes, applications),
        })
    }
}

/// Parses and checks catalog YAML.
///
/// # Errors
/// - `ParseFailed` for malformed YAML
/// - `Invalid` for unknown categories, repeated ids or empty names
///
/// Category and function ids share one weight key space per business
/// process, so a function may not reuse a category id.
fn parse_catalog(yaml: &str) -> Result<CatalogData, CatalogLoadError> {
    let document: CatalogDocument =
        serde_yaml::from_str(yaml).map_err(|e| CatalogLoadError::ParseFailed(e.to_string()))?;

    let mut category_names: HashMap<TermId, &str> = HashMap::new();
    for category in &document.categories {
        require_name("category", &category.id.to_string(), &category.name)?;
        if category_names
            .insert(category.id, category.name.as_str())
            .is_some()
        {
            return Err(CatalogLoadError::Invalid(format!(
                "category {} is defined twice",
                category.id
            )));
        }
    }

    let mut seen_processes = HashSet::new();
    let mut processes = Vec::with_capacity(document.business_processes.len());
    for process in &document.business_processes {
        require_name("business process", process.id.as_deref().unwrap_or(""), &process.name)?;
        let id = match &process.id {
            Some(id) => BusinessProcessId::new(id.clone()),
            None => BusinessProcessId::from_display_name(&process.name),
        }
        .map_err(|e| CatalogLoadError::Invalid(e.to_string()))?;
        if !seen_processes.insert(id.clone()) {
            return Err(CatalogLoadError::Invalid(format!(
                "business process '{}' is defined twice",
                id
            )));
        }

        let mut builder = FunctionTree::builder(id.clone());
        let mut seen_functions = HashSet::new();
        for function in &process.functions {
            require_name("function", &function.id.to_string(), &function.name)?;
            if category_names.contains_key(&function.id) {
                return Err(CatalogLoadError::Invalid(format!(
                    "function {} in '{}' reuses a category id",
                    function.id, id
                )));
            }
            if !seen_functions.insert(function.id) {
                return Err(CatalogLoadError::Invalid(format!(
                    "function {} in '{}' is defined twice",
                    function.id, id
                )));
            }
            let Some(category_name) = category_names.get(&function.category) else {
                return Err(CatalogLoadError::Invalid(format!(
                    "function {} in '{}' references unknown category {}",
                    function.id, id, function.category
                )));
            };
            builder = builder
                .function(function.category, function.id, function.name.clone())
                .category(function.category, *category_name);
        }

        processes.push((BusinessProcess::new(id, process.name.clone()), builder.build()));
    }

    let mut seen_applications: HashSet<&ApplicationId> = HashSet::new();
    for application in &document.applications {
        require_name("application", application.id.as_str(), &application.name)?;
        if !seen_applications.insert(&application.id) {
            return Err(CatalogLoadError::Invalid(format!(
                "application '{}' is defined twice",
                application.id
            )));
        }
    }

    Ok((processes, document.applications))
}

fn require_name(kind: &str, id: &str, name: &str) -> Result<(), CatalogLoadError> {
    if name.trim().is_empty() {
        return Err(CatalogLoadError::Invalid(format!(
            "{} '{}' has an empty name",
            kind, id
        )));
    }
    Ok(())
}

#[async_trait]
impl TaxonomyProvider for YamlCatalog {
    async fn function_tree(
        &self,
        business_process: &BusinessProcessId,
    ) -> Result<FunctionTree, DomainError> {
        self.inner.function_tree(business_process).await
    }

    async fn business_process_names(
        &self,
    ) -> Result<BTreeMap<BusinessProcessId, String>, DomainError> {
        self.inner.business_process_names().await
    }
}

#[async_trait]
impl ApplicationRepository for YamlCatalog {
    async fn find_all(&self) -> Result<Vec<Application>, DomainError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError> {
        self.inner.find_by_id(id).await
    }
}
