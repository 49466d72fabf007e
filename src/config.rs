use crate::domain::ErrorPolicy;
use crate::error::{AddTicketError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Represents the complete configuration for add-ticket.
///
/// Only read when `--config` is given; policy flags still take precedence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// What to do when the branch carries no ticket.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PolicyConfig {
    #[serde(default)]
    pub on_missing: OnMissing,

    /// Ticket text used when `on_missing = "placeholder"`
    #[serde(default)]
    pub placeholder: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnMissing {
    Abort,
    #[default]
    Omit,
    Placeholder,
}

impl Config {
    /// Turn the `[policy]` section into an [ErrorPolicy]
    pub fn error_policy(&self) -> Result<ErrorPolicy> {
        match (self.policy.on_missing, &self.policy.placeholder) {
            (OnMissing::Abort, _) => Ok(ErrorPolicy::Abort),
            (OnMissing::Omit, _) => Ok(ErrorPolicy::Omit),
            (OnMissing::Placeholder, Some(text)) => Ok(ErrorPolicy::Placeholder(text.clone())),
            (OnMissing::Placeholder, None) => Err(AddTicketError::config(
                "policy.on_missing = \"placeholder\" requires policy.placeholder",
            )),
        }
    }
}

/// Loads the configuration file at `path`.
///
/// There is no implicit lookup: a file is only read when the caller names it.
///
/// # Returns
/// * `Ok(Config)` - Parsed configuration
/// * `Err` - If the file cannot be read or parsed
pub fn load_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(path).map_err(|e| {
        AddTicketError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        AddTicketError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })
}
