//! Where the RSVP chat keeps its files.
//!
//! ```text
//! ~/.config/rsvp/config.toml     # configuration
//! ~/.local/share/rsvp/registry.toml  # local guest registry
//! ```

use std::path::PathBuf;

use rsvp_core::RsvpError;
use rsvp_core::error::Result;

const APP_DIR: &str = "rsvp";

pub struct RsvpPaths;

impl RsvpPaths {
    /// Platform config directory joined with `rsvp`.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| RsvpError::config("cannot determine the config directory"))
    }

    /// Platform data directory joined with `rsvp`.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| RsvpError::config("cannot determine the data directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default location of the file-backed registry.
    pub fn registry_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("registry.toml"))
    }
}
