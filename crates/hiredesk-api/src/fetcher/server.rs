//! Server-side fetcher: one session read, no recovery.

use std::sync::Arc;

use async_trait::async_trait;
use hiredesk_common::new_correlation_id;
use tracing::debug;

use super::{has_caller_authorization, prepare, set_bearer};
use crate::session::SessionProvider;
use crate::transport::{ApiResponse, HttpTransport, RequestOptions};
use crate::{Fetch, FetchError};

/// Reads the session snapshot once per call and returns whatever the API
/// answers. The session layer is expected to have rotated the token
/// already; a 401 is the caller's to handle.
pub struct ServerFetcher {
    origin: String,
    transport: Arc<dyn HttpTransport>,
    sessions: Arc<dyn SessionProvider>,
}

impl ServerFetcher {
    pub fn new(
        origin: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            origin: origin.into(),
            transport,
            sessions,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[async_trait]
impl Fetch for ServerFetcher {
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, FetchError> {
        let request_id = new_correlation_id();
        let mut request = prepare(&self.origin, endpoint, &options);

        if !has_caller_authorization(&request) {
            let session = self.sessions.current_session().await;
            if let Some(token) = session.token() {
                set_bearer(&mut request, token)?;
            }
        }

        debug!(request_id = %request_id, method = %request.method, url = %request.url, "API request (server)");
        let response = self.transport.send(&request).await?;
        debug!(request_id = %request_id, status = response.status().as_u16(), "API response (server)");
        Ok(response)
    }
}
