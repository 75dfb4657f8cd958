use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use rsvp_infrastructure::build_registry;

use super::load_config;

pub async fn list(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let registry = build_registry(&config.registry)?;
    let names = registry
        .fetch_all()
        .await
        .context("Failed to read the guest registry")?;

    if names.is_empty() {
        println!("{}", "No guests registered yet.".bright_black());
        return Ok(());
    }

    for (i, name) in names.iter().enumerate() {
        println!("{:>3}. {}", i + 1, name);
    }
    println!("{}", format!("{} guest(s)", names.len()).bright_black());
    Ok(())
}
