//! Forced sign-out.

use std::sync::Arc;

use async_trait::async_trait;
use hiredesk_common::{Event, EventBus};
use tracing::info;

use super::store::SessionStore;
use crate::SessionError;

/// Invalidates the local session and sends the user to a login surface.
#[async_trait]
pub trait SignOut: Send + Sync {
    async fn force_sign_out(&self, redirect_to: &str) -> Result<(), SessionError>;
}

/// Clears the [`SessionStore`] and announces the redirect on the event bus;
/// whoever owns navigation subscribes to `Event::SignedOut`.
pub struct LocalSignOut {
    store: SessionStore,
    events: Arc<EventBus>,
}

impl LocalSignOut {
    pub fn new(store: SessionStore, events: Arc<EventBus>) -> Self {
        Self { store, events }
    }
}

#[async_trait]
impl SignOut for LocalSignOut {
    async fn force_sign_out(&self, redirect_to: &str) -> Result<(), SessionError> {
        self.store.clear().await;
        let delivered = self.events.publish(Event::SignedOut {
            redirect_to: redirect_to.to_string(),
        });
        info!(redirect_to, delivered, "Signed out");
        Ok(())
    }
}
