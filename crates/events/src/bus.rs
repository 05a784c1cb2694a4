//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use presentoir_core::types::EntityId;
use tokio::sync::broadcast;

/// Buffer capacity for the broadcast channel.
const CAPACITY: usize = 256;

/// The stand activity that may trigger an e-mail notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    StandReserved,
    PosterRequestCreated,
}

impl EventKind {
    /// Dot-separated name used in log records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StandReserved => "stand.reserved",
            Self::PosterRequestCreated => "poster_request.created",
        }
    }
}

/// Something a reservation holder did to a stand.
#[derive(Debug, Clone)]
pub struct StandEvent {
    pub kind: EventKind,
    pub stand_id: EntityId,
    /// Reservation holder who triggered the event.
    pub actor: String,
    /// Event-specific details for the notification body.
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl StandEvent {
    pub fn new(
        kind: EventKind,
        stand_id: impl Into<EntityId>,
        actor: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            kind,
            stand_id: stand_id.into(),
            actor: actor.into(),
            payload,
            timestamp: Utc::now(),
        }
    }
}

/// Fan-out hub between the request handlers and the notification log.
///
/// When the buffer is full the oldest un-consumed events are dropped and
/// slow receivers observe `RecvError::Lagged`.
pub struct EventBus {
    sender: broadcast::Sender<StandEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CAPACITY);
        Self { sender }
    }

    /// Publish to all current subscribers. With none, the event is dropped.
    pub fn publish(&self, event: StandEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StandEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
