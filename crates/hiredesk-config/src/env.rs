//! Environment overrides layered on top of the TOML config.

use tracing::debug;

use crate::schema::HiredeskConfig;

/// Backend origin override.
pub const API_URL_ENV: &str = "HIREDESK_API_URL";
/// OAuth2 token endpoint override.
pub const TOKEN_ENDPOINT_ENV: &str = "HIREDESK_TOKEN_ENDPOINT";

/// Apply `HIREDESK_*` environment variables to `config`.
pub fn apply_env_overrides(config: &mut HiredeskConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` in place of the process environment.
/// Empty values are ignored.
pub fn apply_overrides_from(config: &mut HiredeskConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(origin) = non_empty(API_URL_ENV) {
        debug!(origin = %origin, "api origin taken from {API_URL_ENV}");
        config.api.origin = origin.trim().to_string();
    }
    if let Some(endpoint) = non_empty(TOKEN_ENDPOINT_ENV) {
        debug!("token endpoint taken from {TOKEN_ENDPOINT_ENV}");
        config.auth.token_endpoint = Some(endpoint.trim().to_string());
    }
}
