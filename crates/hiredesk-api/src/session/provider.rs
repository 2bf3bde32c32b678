//! The session-provider seam and its simplest implementation.

use async_trait::async_trait;

use super::store::SessionStore;
use super::types::Session;
use crate::SessionError;

/// Supplies the current session and can refresh it.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The live session, read at call time.
    async fn current_session(&self) -> Session;

    /// Re-evaluate the session, rotating the token if the provider can.
    async fn refresh_session(&self) -> Result<Session, SessionError>;
}

/// Serves whatever the store holds; refreshing re-reads the store.
///
/// Fits service tokens and sessions rotated by something else.
#[derive(Clone, Default)]
pub struct StaticSessionProvider {
    store: SessionStore,
}

impl StaticSessionProvider {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn from_token(token: impl Into<String>) -> Self {
        Self::new(SessionStore::new(Session::with_token(token)))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self) -> Session {
        self.store.snapshot().await
    }

    async fn refresh_session(&self) -> Result<Session, SessionError> {
        Ok(self.store.snapshot().await)
    }
}
