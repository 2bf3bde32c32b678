use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Authentication lifecycle events, published by session providers and
/// the sign-out action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    SessionRefreshed { expires_at: Option<i64> },
    RefreshFailed { reason: String },
    SignedOut { redirect_to: String },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event, returning how many subscribers received it.
    pub fn publish(&self, event: Event) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!(delivered, "auth event published");
        delivered
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
