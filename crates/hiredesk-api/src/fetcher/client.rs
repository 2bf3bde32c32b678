//! Client-side fetcher: bearer injection, refresh on 401, one retry,
//! forced sign-out.

use std::sync::Arc;

use async_trait::async_trait;
use hiredesk_common::new_correlation_id;
use tracing::{debug, info, warn};

use super::gate::RefreshGate;
use super::{has_caller_authorization, prepare, set_bearer};
use crate::session::{SessionProvider, SignOut};
use crate::transport::{ApiResponse, HttpTransport, RequestOptions};
use crate::{Fetch, FetchError};

/// Redirect target used for forced sign-out unless configured otherwise.
pub const DEFAULT_LOGIN_REDIRECT: &str = "/login";

pub struct AuthenticatedFetcher {
    origin: String,
    transport: Arc<dyn HttpTransport>,
    sessions: Arc<dyn SessionProvider>,
    sign_out: Arc<dyn SignOut>,
    login_redirect: String,
    gate: RefreshGate,
}

impl AuthenticatedFetcher {
    pub fn new(
        origin: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        sessions: Arc<dyn SessionProvider>,
        sign_out: Arc<dyn SignOut>,
    ) -> Self {
        Self {
            origin: origin.into(),
            transport,
            sessions,
            sign_out,
            login_redirect: DEFAULT_LOGIN_REDIRECT.to_string(),
            gate: RefreshGate::default(),
        }
    }

    pub fn with_login_redirect(mut self, redirect_to: impl Into<String>) -> Self {
        self.login_redirect = redirect_to.into();
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Best-effort: failures are logged, never returned.
    async fn force_sign_out(&self, request_id: &str) {
        info!(request_id = %request_id, redirect_to = %self.login_redirect, "Session unrecoverable, signing out");
        if let Err(e) = self.sign_out.force_sign_out(&self.login_redirect).await {
            warn!(request_id = %request_id, error = %e, "Forced sign-out failed");
        }
    }
}

#[async_trait]
impl Fetch for AuthenticatedFetcher {
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, FetchError> {
        let request_id = new_correlation_id();
        let mut request = prepare(&self.origin, endpoint, &options);

        if has_caller_authorization(&request) {
            debug!(request_id = %request_id, method = %request.method, url = %request.url, "API request with caller credentials");
            return self.transport.send(&request).await;
        }

        let session = self.sessions.current_session().await;
        let sent_token = session.access_token;
        if let Some(ref token) = sent_token {
            set_bearer(&mut request, token)?;
        }

        debug!(request_id = %request_id, method = %request.method, url = %request.url, "API request");
        let response = self.transport.send(&request).await?;
        if !response.is_unauthorized() {
            return Ok(response);
        }

        warn!(request_id = %request_id, url = %request.url, "API returned 401, refreshing session");
        let refreshed = self
            .gate
            .refresh(self.sessions.as_ref(), sent_token.as_deref())
            .await;
        let Some(token) = refreshed.and_then(|s| s.access_token) else {
            self.force_sign_out(&request_id).await;
            return Ok(response);
        };

        set_bearer(&mut request, &token)?;
        debug!(request_id = %request_id, url = %request.url, "Retrying with refreshed token");
        let retry = self.transport.send(&request).await?;
        if retry.is_unauthorized() {
            self.force_sign_out(&request_id).await;
        }
        Ok(retry)
    }
}
