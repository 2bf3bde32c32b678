//! Backend API configuration types.

use serde::{Deserialize, Serialize};

/// Origin used when neither the config file nor the environment name one.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Backend API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the backend, e.g. `https://api.example.com`.
    pub origin: String,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_API_ORIGIN.to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 30,
        }
    }
}
