//! Session and sign-out configuration types.

use serde::{Deserialize, Serialize};

/// Session refresh and sign-out settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Where a forced sign-out sends the user.
    pub login_path: String,
    /// OAuth2 token endpoint used for `refresh_token` grants.
    pub token_endpoint: Option<String>,
    /// Client id sent with refresh grants, when the identity provider wants one.
    pub client_id: Option<String>,
    /// Treat a token as expired this many seconds before its real expiry.
    pub refresh_skew_secs: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            token_endpoint: None,
            client_id: None,
            refresh_skew_secs: 30,
        }
    }
}
