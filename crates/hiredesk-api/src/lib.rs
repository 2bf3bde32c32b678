//! Authenticated API client for the hiredesk backend.
//!
//! Provides:
//! - `AuthenticatedFetcher`: bearer-token injection, session refresh on 401,
//!   a single retry, and forced sign-out when the session cannot be recovered
//! - `ServerFetcher`: reads the session snapshot once and leaves 401 handling
//!   to the caller
//! - Session providers (`StaticSessionProvider`, `OAuthSessionProvider`) over a
//!   shared `SessionStore`, and the `LocalSignOut` action
//! - A reqwest-backed `HttpTransport`

pub mod fetcher;
pub mod session;
pub mod transport;
pub mod url;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use fetcher::{AuthenticatedFetcher, ServerFetcher, DEFAULT_LOGIN_REDIRECT};
pub use reqwest::{Method, StatusCode};
pub use session::{
    LocalSignOut, OAuthSessionProvider, Session, SessionProvider, SessionStore, SignOut,
    StaticSessionProvider, UserProfile,
};
pub use transport::{
    ApiRequest, ApiResponse, CacheMode, HttpTransport, RequestOptions, ReqwestTransport,
};
pub use url::resolve_url;

/// Caller-facing request function, implemented by both fetcher variants.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issue `options` against `endpoint` (a path relative to the API origin).
    ///
    /// Every HTTP status, error statuses included, comes back as `Ok`; only
    /// transport failures are returned as `Err`.
    async fn request(&self, endpoint: &str, options: RequestOptions)
        -> Result<ApiResponse, FetchError>;

    async fn get(&self, endpoint: &str) -> Result<ApiResponse, FetchError> {
        self.request(endpoint, RequestOptions::default()).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("HTTP client error: {0}")]
    ClientError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no refresh token available")]
    NoRefreshToken,
    #[error("token endpoint rejected refresh: HTTP {0}")]
    Rejected(u16),
    #[error("refresh request failed: {0}")]
    RefreshFailed(String),
    #[error("sign-out failed: {0}")]
    SignOutFailed(String),
}
