//! Coalescing of concurrent session refreshes.

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::session::{Session, SessionProvider};

/// Lets one refresh run at a time. A caller that gets the gate after
/// another caller already rotated the token reuses that token.
#[derive(Default)]
pub(crate) struct RefreshGate {
    lock: Mutex<()>,
}

impl RefreshGate {
    /// Refresh after `stale` was rejected. `None` means no token could be
    /// obtained; refresh errors are logged here.
    pub(crate) async fn refresh(
        &self,
        sessions: &dyn SessionProvider,
        stale: Option<&str>,
    ) -> Option<Session> {
        let _guard = self.lock.lock().await;

        let current = sessions.current_session().await;
        if current.token().is_some() && current.token() != stale {
            debug!("Session already refreshed by a concurrent request");
            return Some(current);
        }

        match sessions.refresh_session().await {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "Session refresh failed");
                None
            }
        }
    }
}
