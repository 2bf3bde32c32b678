//! Shared, mutable session storage.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::types::Session;

#[derive(Default)]
struct Credentials {
    session: Session,
    refresh_token: Option<String>,
}

/// Thread-safe session store shared by providers and the sign-out action.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Credentials>>,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        Self::with_refresh_token(session, None)
    }

    pub fn with_refresh_token(session: Session, refresh_token: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Credentials {
                session,
                refresh_token,
            })),
        }
    }

    /// A copy of the current session.
    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.session.clone()
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.inner.read().await.refresh_token.clone()
    }

    /// Install a rotated session. A `None` refresh token keeps the current one.
    pub async fn rotate(&self, session: Session, refresh_token: Option<String>) {
        let mut credentials = self.inner.write().await;
        credentials.session = session;
        if refresh_token.is_some() {
            credentials.refresh_token = refresh_token;
        }
    }

    /// Drop the session and its refresh credential.
    pub async fn clear(&self) {
        let mut credentials = self.inner.write().await;
        *credentials = Credentials::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_returns_current_session() {
        let store = SessionStore::new(Session::with_token("a"));
        assert_eq!(store.snapshot().await.token(), Some("a"));
    }

    #[tokio::test]
    async fn rotate_keeps_refresh_token_when_not_rotated() {
        let store = SessionStore::with_refresh_token(Session::with_token("a"), Some("r1".into()));
        store.rotate(Session::with_token("b"), None).await;
        assert_eq!(store.snapshot().await.token(), Some("b"));
        assert_eq!(store.refresh_token().await.as_deref(), Some("r1"));

        store.rotate(Session::with_token("c"), Some("r2".into())).await;
        assert_eq!(store.refresh_token().await.as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let store = SessionStore::with_refresh_token(Session::with_token("a"), Some("r".into()));
        store.clear().await;
        assert!(!store.snapshot().await.is_authenticated());
        assert!(store.refresh_token().await.is_none());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = SessionStore::default();
        let other = store.clone();
        other.rotate(Session::with_token("shared"), None).await;
        assert_eq!(store.snapshot().await.token(), Some("shared"));
    }
}
