pub mod chat;
pub mod registry;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rsvp_core::config::RsvpConfig;
use rsvp_infrastructure::ConfigService;

/// Loads configuration from `--config` or the default location.
pub fn load_config(path: Option<PathBuf>) -> Result<RsvpConfig> {
    let service = ConfigService::from_override(path)?;
    service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))
}
