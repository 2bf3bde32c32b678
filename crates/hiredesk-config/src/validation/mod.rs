//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects the errors into a single `ConfigError`.

mod api;
mod auth;
mod helpers;


use crate::schema::HiredeskConfig;
use hiredesk_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HiredeskConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    auth::validate_auth(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
