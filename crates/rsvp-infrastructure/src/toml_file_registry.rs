//! Guest registry kept in a local TOML file.
//!
//! # File Format
//!
//! ```toml
//! names = ["Ana Reyes", "Juan Dela Cruz"]
//! ```
//!
//! File I/O is blocking, so every call runs on `tokio::task::spawn_blocking`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rsvp_core::RsvpError;
use rsvp_core::error::Result;
use rsvp_core::registry::RegistryGateway;
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::paths::RsvpPaths;
use crate::storage::AtomicTomlFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GuestListDocument {
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TomlFileRegistry {
    file: AtomicTomlFile<GuestListDocument>,
}

impl TomlFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Registry at `~/.local/share/rsvp/registry.toml`.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(RsvpPaths::registry_file()?))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl RegistryGateway for TomlFileRegistry {
    async fn fetch_all(&self) -> Result<Vec<String>> {
        let file = self.file.clone();
        let doc = task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| RsvpError::internal(format!("Failed to spawn blocking task: {}", e)))?
            .map_err(|e| RsvpError::registry(e.to_string()))?;

        let names = doc.map(|d| d.names).unwrap_or_default();
        tracing::debug!(path = %self.path().display(), count = names.len(), "registry loaded");
        Ok(names)
    }

    async fn replace_all(&self, names: &[String]) -> Result<()> {
        let file = self.file.clone();
        let doc = GuestListDocument {
            names: names.to_vec(),
        };
        task::spawn_blocking(move || file.replace(&doc))
            .await
            .map_err(|e| RsvpError::internal(format!("Failed to spawn blocking task: {}", e)))?
            .map_err(|e| RsvpError::registry(e.to_string()))?;

        tracing::info!(path = %self.path().display(), count = names.len(), "registry written");
        Ok(())
    }
}
