//! Wizard state configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Key prefix for persisted wizard state
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Lifetime of an abandoned wizard run, in seconds
    #[serde(default = "default_state_ttl")]
    pub state_ttl_secs: u64,
}

impl WizardConfig {
    pub fn state_ttl(&self) -> Duration {
        Duration::from_secs(self.state_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.namespace.trim().is_empty() {
            return Err(ValidationError::EmptyNamespace);
        }
        if self.state_ttl_secs == 0 {
            return Err(ValidationError::InvalidStateTtl);
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            state_ttl_secs: default_state_ttl(),
        }
    }
}

fn default_namespace() -> String {
    "software_advisor".to_string()
}

fn default_state_ttl() -> u64 {
    86_400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WizardConfig::default();
        assert_eq!(config.namespace, "software_advisor");
        assert_eq!(config.state_ttl(), Duration::from_secs(86_400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_namespace_is_rejected() {
        let config = WizardConfig {
            namespace: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyNamespace));
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let config = WizardConfig {
            state_ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidStateTtl));
    }
}
