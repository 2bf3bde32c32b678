//! Session value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Profile data carried alongside the token. Opaque to the fetchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Current authentication state: bearer token, expiry, profile.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    /// Unix timestamp (seconds) when the access token stops being valid.
    pub expires_at: Option<i64>,
    pub user: Option<UserProfile>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

impl Session {
    /// A session without a token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn with_expiry(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = Some(user);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether the token expires within `skew_secs` from now.
    /// Sessions without expiry metadata never expire.
    pub fn is_expired(&self, skew_secs: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => current_timestamp().saturating_add(skew_secs) >= expires_at,
            None => false,
        }
    }

    /// Seconds until expiry, clamped at zero.
    pub fn time_to_expiry(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| expires_at.saturating_sub(current_timestamp()).max(0))
    }
}

pub(crate) fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
