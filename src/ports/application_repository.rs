//! Application repository port (read side).
//!
//! Candidate applications are maintained outside the advisor; it only
//! reads them.

use async_trait::async_trait;

use crate::domain::catalog::Application;
use crate::domain::foundation::{ApplicationId, DomainError};

/// Read access to candidate applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// All applications in a stable order.
    ///
    /// The order is the tie-break order of suggestion rankings.
    async fn find_all(&self) -> Result<Vec<Application>, DomainError>;

    /// Find an application by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ApplicationRepository) {}
    }
}
