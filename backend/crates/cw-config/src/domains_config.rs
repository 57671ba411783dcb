use crate::{ConfigError, ConfigErrorResult};

use cw_core::DEFAULT_CREDENTIAL_DOMAINS;

use serde::Deserialize;

/// Credential-hosting domains accepted for certificate and wallet URLs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DomainsConfig {
    pub allowed: Vec<String>,
}

impl Default for DomainsConfig {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_CREDENTIAL_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl DomainsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed.iter().all(|d| d.trim().is_empty()) {
            return Err(ConfigError::domains("domains.allowed cannot be empty"));
        }

        if let Some(bad) = self
            .allowed
            .iter()
            .find(|d| d.contains('/') || d.contains(':') || d.contains(char::is_whitespace))
        {
            return Err(ConfigError::domains(format!(
                "domains.allowed entries must be bare host names, got '{}'",
                bad
            )));
        }

        Ok(())
    }

    /// Parse a comma-separated override list
    pub fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from)
            .collect()
    }
}
