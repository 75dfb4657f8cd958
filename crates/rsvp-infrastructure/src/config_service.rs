//! Configuration loading.
//!
//! Reads `RsvpConfig` from `--config <path>` or `~/.config/rsvp/config.toml`.
//! A missing file means defaults. JSONBin credentials may also come from the
//! environment, which wins over the file.

use std::env;
use std::path::{Path, PathBuf};

use rsvp_core::RsvpError;
use rsvp_core::config::{RegistryConfig, RsvpConfig};
use rsvp_core::error::Result;

use crate::paths::RsvpPaths;

pub const ENV_JSONBIN_URL: &str = "RSVP_JSONBIN_URL";
pub const ENV_JSONBIN_API_KEY: &str = "RSVP_JSONBIN_API_KEY";

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for an explicit path, or the default config file.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(RsvpPaths::config_file()?)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and applies environment overrides.
    pub fn load(&self) -> Result<RsvpConfig> {
        let config = self.load_file()?;
        Ok(apply_env_overrides(config, |name| env::var(name).ok()))
    }

    fn load_file(&self) -> Result<RsvpConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(RsvpConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: RsvpConfig = toml::from_str(&content).map_err(|e| {
            RsvpError::config(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::info!(path = %self.path.display(), "config loaded");
        Ok(config)
    }
}

/// Fills JSONBin settings from the environment.
///
/// Setting `RSVP_JSONBIN_URL` selects the JSONBin backend even when the file
/// names another one.
pub fn apply_env_overrides<F>(mut config: RsvpConfig, lookup: F) -> RsvpConfig
where
    F: Fn(&str) -> Option<String>,
{
    let env_url = lookup(ENV_JSONBIN_URL).filter(|v| !v.trim().is_empty());
    let env_key = lookup(ENV_JSONBIN_API_KEY).filter(|v| !v.trim().is_empty());

    config.registry = match config.registry {
        RegistryConfig::Jsonbin { url, api_key } => RegistryConfig::Jsonbin {
            url: env_url.or(url),
            api_key: env_key.or(api_key),
        },
        other => match env_url {
            Some(url) => {
                tracing::debug!("{} set, using the JSONBin registry", ENV_JSONBIN_URL);
                RegistryConfig::Jsonbin {
                    url: Some(url),
                    api_key: env_key,
                }
            }
            None => other,
        },
    };
    config
}
