//! Infrastructure for the RSVP chat: registry backends, configuration
//! loading and file paths.

pub mod config_service;
pub mod jsonbin_registry;
pub mod memory_registry;
pub mod paths;
pub mod storage;
pub mod toml_file_registry;

use std::sync::Arc;

use rsvp_core::RsvpError;
use rsvp_core::config::RegistryConfig;
use rsvp_core::error::Result;
use rsvp_core::registry::RegistryGateway;

pub use crate::config_service::ConfigService;
pub use crate::jsonbin_registry::JsonBinRegistry;
pub use crate::memory_registry::InMemoryRegistry;
pub use crate::paths::RsvpPaths;
pub use crate::toml_file_registry::TomlFileRegistry;

/// Builds the registry backend named by the configuration.
pub fn build_registry(config: &RegistryConfig) -> Result<Arc<dyn RegistryGateway>> {
    let registry: Arc<dyn RegistryGateway> = match config {
        RegistryConfig::File { path: Some(path) } => Arc::new(TomlFileRegistry::new(path.clone())),
        RegistryConfig::File { path: None } => Arc::new(TomlFileRegistry::default_location()?),
        RegistryConfig::Jsonbin { url, api_key } => {
            let url = url.as_deref().ok_or_else(|| {
                RsvpError::config(format!(
                    "registry.url (or {}) is required for the jsonbin backend",
                    config_service::ENV_JSONBIN_URL
                ))
            })?;
            Arc::new(JsonBinRegistry::new(url, api_key.clone()))
        }
        RegistryConfig::Memory => Arc::new(InMemoryRegistry::new()),
    };
    tracing::debug!(backend = backend_name(config), "registry backend ready");
    Ok(registry)
}

fn backend_name(config: &RegistryConfig) -> &'static str {
    match config {
        RegistryConfig::File { .. } => "file",
        RegistryConfig::Jsonbin { .. } => "jsonbin",
        RegistryConfig::Memory => "memory",
    }
}
