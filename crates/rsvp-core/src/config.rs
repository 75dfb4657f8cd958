//! Configuration model (`config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::idle::{DEFAULT_CHECK_IN_AFTER, DEFAULT_TIMEOUT_AFTER, IdleSettings};
use crate::locale::Locale;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RsvpConfig {
    /// Locale used when the caller does not pick one. Unset means the
    /// invitee is asked to choose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<Locale>,
    /// Single-token names accepted as full names.
    #[serde(default)]
    pub approved_names: Vec<String>,
    #[serde(default)]
    pub idle: IdleConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IdleConfig {
    #[serde(default = "default_check_in_after_secs")]
    pub check_in_after_secs: u64,
    #[serde(default = "default_timeout_after_secs")]
    pub timeout_after_secs: u64,
}

fn default_check_in_after_secs() -> u64 {
    DEFAULT_CHECK_IN_AFTER.as_secs()
}

fn default_timeout_after_secs() -> u64 {
    DEFAULT_TIMEOUT_AFTER.as_secs()
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            check_in_after_secs: default_check_in_after_secs(),
            timeout_after_secs: default_timeout_after_secs(),
        }
    }
}

impl IdleConfig {
    pub fn settings(&self) -> IdleSettings {
        IdleSettings {
            check_in_after: Duration::from_secs(self.check_in_after_secs),
            timeout_after: Duration::from_secs(self.timeout_after_secs),
        }
    }
}

/// Which registry backend to use.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum RegistryConfig {
    /// A local TOML file. `path = None` means the default data directory.
    File {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    /// A JSONBin document.
    Jsonbin {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        api_key: Option<String>,
    },
    /// Process memory only; nothing survives a restart.
    Memory,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::File { path: None }
    }
}
