//! Assemble transport, session provider, sign-out and fetcher from config.

use std::sync::Arc;
use std::time::Duration;

use hiredesk_api::session::token_expiry;
use hiredesk_api::{
    AuthenticatedFetcher, Fetch, HttpTransport, LocalSignOut, OAuthSessionProvider,
    ReqwestTransport, ServerFetcher, Session, SessionProvider, SessionStore,
    StaticSessionProvider,
};
use hiredesk_common::{EventBus, HiredeskError};
use hiredesk_config::HiredeskConfig;
use tracing::{debug, warn};

pub const ACCESS_TOKEN_ENV: &str = "HIREDESK_ACCESS_TOKEN";
pub const REFRESH_TOKEN_ENV: &str = "HIREDESK_REFRESH_TOKEN";

/// Tokens the command starts with.
#[derive(Default)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Credentials {
    /// Flags first, then the environment.
    pub fn resolve(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        let from_env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        Self {
            access_token: access_token.or_else(|| from_env(ACCESS_TOKEN_ENV)),
            refresh_token: refresh_token.or_else(|| from_env(REFRESH_TOKEN_ENV)),
        }
    }

    fn initial_session(&self) -> Session {
        match self.access_token {
            Some(ref token) => {
                let session = Session::with_token(token.clone());
                match token_expiry(token) {
                    Some(exp) => session.with_expiry(exp),
                    None => session,
                }
            }
            None => Session::anonymous(),
        }
    }
}

/// A ready-to-use fetcher plus the bus its sign-out publishes on.
pub struct Client {
    pub fetcher: Box<dyn Fetch>,
    pub events: Arc<EventBus>,
}

pub fn build_client(
    config: &HiredeskConfig,
    credentials: Credentials,
    server: bool,
) -> Result<Client, HiredeskError> {
    let transport: Arc<dyn HttpTransport> = Arc::new(
        ReqwestTransport::new(
            Duration::from_secs(u64::from(config.api.connect_timeout_secs)),
            Duration::from_secs(u64::from(config.api.timeout_secs)),
        )
        .map_err(|e| HiredeskError::Network(e.to_string()))?,
    );

    let events = Arc::new(EventBus::default());
    let store = SessionStore::with_refresh_token(
        credentials.initial_session(),
        credentials.refresh_token.clone(),
    );
    let sessions = session_provider(config, &credentials, &store, &transport, &events);

    let origin = config.api.origin.clone();
    let fetcher: Box<dyn Fetch> = if server {
        debug!(origin = %origin, "Using server-side fetcher");
        Box::new(ServerFetcher::new(origin, transport, sessions))
    } else {
        debug!(origin = %origin, "Using client-side fetcher");
        let sign_out = Arc::new(LocalSignOut::new(store, Arc::clone(&events)));
        Box::new(
            AuthenticatedFetcher::new(origin, transport, sessions, sign_out)
                .with_login_redirect(config.auth.login_path.clone()),
        )
    };

    Ok(Client { fetcher, events })
}

fn session_provider(
    config: &HiredeskConfig,
    credentials: &Credentials,
    store: &SessionStore,
    transport: &Arc<dyn HttpTransport>,
    events: &Arc<EventBus>,
) -> Arc<dyn SessionProvider> {
    match (&config.auth.token_endpoint, &credentials.refresh_token) {
        (Some(endpoint), Some(_)) => {
            let mut provider =
                OAuthSessionProvider::new(store.clone(), Arc::clone(transport), endpoint.clone())
                    .with_refresh_skew(i64::from(config.auth.refresh_skew_secs))
                    .with_events(Arc::clone(events));
            if let Some(ref client_id) = config.auth.client_id {
                provider = provider.with_client_id(client_id.clone());
            }
            Arc::new(provider)
        }
        (None, Some(_)) => {
            warn!("Refresh token given but auth.token_endpoint is not set; tokens will not rotate");
            Arc::new(StaticSessionProvider::new(store.clone()))
        }
        _ => Arc::new(StaticSessionProvider::new(store.clone())),
    }
}
