//! Builds a [`DialogueEngine`] from configuration.

use rsvp_core::config::RsvpConfig;
use rsvp_core::error::Result;
use rsvp_core::guest::NameValidator;
use rsvp_infrastructure::build_registry;
use rsvp_interaction::DialogueEngine;

/// Engine with the configured registry backend, name allow-list and idle
/// intervals.
pub fn build_engine(config: &RsvpConfig) -> Result<DialogueEngine> {
    let registry = build_registry(&config.registry)?;
    let validator = NameValidator::with_allow_list(config.approved_names.iter().cloned());

    tracing::debug!(
        approved_names = config.approved_names.len(),
        check_in_after_secs = config.idle.check_in_after_secs,
        timeout_after_secs = config.idle.timeout_after_secs,
        "dialogue engine configured"
    );

    Ok(DialogueEngine::new(registry)
        .with_validator(validator)
        .with_idle_settings(config.idle.settings()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_core::config::{IdleConfig, RegistryConfig};
    use std::time::Duration;

    #[test]
    fn test_engine_uses_configured_idle_settings() {
        let config = RsvpConfig {
            registry: RegistryConfig::Memory,
            idle: IdleConfig {
                check_in_after_secs: 5,
                timeout_after_secs: 7,
            },
            ..Default::default()
        };
        let engine = build_engine(&config).unwrap();
        assert_eq!(engine.idle_settings().check_in_after, Duration::from_secs(5));
        assert_eq!(engine.idle_settings().timeout_after, Duration::from_secs(7));
    }
}
