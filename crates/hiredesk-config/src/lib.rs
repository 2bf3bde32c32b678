//! hiredesk configuration.
//!
//! TOML-based configuration for the API client: backend origin, transport
//! timeouts, session refresh endpoint and logging. Every section uses
//! serde defaults so partial configs work out of the box, and the API
//! origin can be supplied through the environment.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hiredesk_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.api.origin);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, API_URL_ENV, TOKEN_ENDPOINT_ENV};
pub use schema::{HiredeskConfig, CONFIG_SCHEMA_VERSION, DEFAULT_API_ORIGIN};

use hiredesk_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory (creating a documented
/// default if none exists), applies environment overrides, and validates
/// the result.
pub fn load_config() -> Result<HiredeskConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Like [`load_config`], but reads an explicit file instead of the
/// platform default.
pub fn load_config_from(path: &std::path::Path) -> Result<HiredeskConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}
