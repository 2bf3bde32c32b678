//! Refresh-token rotation against an OAuth2 token endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use hiredesk_common::{Event, EventBus};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::jwt::token_expiry;
use super::provider::SessionProvider;
use super::store::SessionStore;
use super::types::{current_timestamp, Session};
use crate::transport::{ApiRequest, HttpTransport};
use crate::SessionError;

/// Successful `refresh_token` grant response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
}

/// Session provider that rotates tokens with the `refresh_token` grant.
///
/// `current_session` rotates an expired token before returning it, so
/// callers that read the session once (the server fetcher) still get a
/// fresh token. `refresh_session` always rotates.
///
/// Grants are serialized: a caller that waited on another rotation reuses
/// its result instead of spending the same refresh token again.
pub struct OAuthSessionProvider {
    store: SessionStore,
    transport: Arc<dyn HttpTransport>,
    token_endpoint: String,
    client_id: Option<String>,
    skew_secs: i64,
    events: Option<Arc<EventBus>>,
    rotation: Mutex<()>,
}

impl OAuthSessionProvider {
    pub fn new(
        store: SessionStore,
        transport: Arc<dyn HttpTransport>,
        token_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            store,
            transport,
            token_endpoint: token_endpoint.into(),
            client_id: None,
            skew_secs: 30,
            events: None,
            rotation: Mutex::new(()),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_refresh_skew(mut self, skew_secs: i64) -> Self {
        self.skew_secs = skew_secs;
        self
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    fn publish(&self, event: Event) {
        if let Some(ref events) = self.events {
            events.publish(event);
        }
    }

    fn build_refresh_request(&self, refresh_token: &str) -> ApiRequest {
        let mut form = format!(
            "grant_type=refresh_token&refresh_token={}",
            urlencoding::encode(refresh_token)
        );
        if let Some(ref client_id) = self.client_id {
            form.push_str("&client_id=");
            form.push_str(&urlencoding::encode(client_id));
        }

        let mut request = ApiRequest::new(Method::POST, self.token_endpoint.clone());
        request.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        request.body = Some(form.into_bytes());
        request
    }

    /// Rotate unless the token moved on from `seen` while we waited.
    async fn rotate_from(&self, seen: Option<String>) -> Result<Session, SessionError> {
        let _guard = self.rotation.lock().await;

        let current = self.store.snapshot().await;
        if current.access_token.is_some() && current.access_token != seen {
            debug!("Token already rotated by a concurrent caller");
            return Ok(current);
        }
        self.rotate().await
    }

    async fn rotate(&self) -> Result<Session, SessionError> {
        let refresh_token = self
            .store
            .refresh_token()
            .await
            .ok_or(SessionError::NoRefreshToken)?;

        debug!(endpoint = %self.token_endpoint, "Rotating access token");
        let request = self.build_refresh_request(&refresh_token);
        let response = self
            .transport
            .send(&request)
            .await
            .map_err(|e| SessionError::RefreshFailed(e.to_string()))?;

        if !response.is_success() {
            let status = response.status().as_u16();
            self.publish(Event::RefreshFailed {
                reason: format!("HTTP {status}"),
            });
            return Err(SessionError::Rejected(status));
        }

        let token: TokenResponse = response
            .json()
            .map_err(|e| SessionError::RefreshFailed(e.to_string()))?;

        let expires_at = token
            .expires_in
            .map(|secs| current_timestamp().saturating_add(secs))
            .or_else(|| token_expiry(&token.access_token));

        let previous = self.store.snapshot().await;
        let session = Session {
            access_token: Some(token.access_token),
            expires_at,
            user: previous.user,
        };
        self.store
            .rotate(session.clone(), token.refresh_token)
            .await;

        self.publish(Event::SessionRefreshed { expires_at });
        Ok(session)
    }
}

#[async_trait]
impl SessionProvider for OAuthSessionProvider {
    async fn current_session(&self) -> Session {
        let session = self.store.snapshot().await;
        if !session.is_authenticated() || !session.is_expired(self.skew_secs) {
            return session;
        }
        if self.store.refresh_token().await.is_none() {
            return session;
        }

        match self.rotate_from(session.access_token.clone()).await {
            Ok(rotated) => rotated,
            Err(e) => {
                warn!(error = %e, "Proactive token rotation failed, serving stale session");
                session
            }
        }
    }

    async fn refresh_session(&self) -> Result<Session, SessionError> {
        let seen = self.store.snapshot().await.access_token;
        self.rotate_from(seen).await
    }
}
