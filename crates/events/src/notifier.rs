//! Notification log fed by the event bus.
//!
//! [`NotificationLog`] subscribes to the bus and writes one structured
//! `tracing` record per event. Which events get published at all is decided
//! upstream by the settings' e-mail toggles.

use tokio::sync::broadcast;

use crate::bus::StandEvent;

/// Background subscriber that records notification events.
pub struct NotificationLog;

impl NotificationLog {
    /// Run until the bus is dropped, returning how many events were logged.
    pub async fn run(mut receiver: broadcast::Receiver<StandEvent>) -> usize {
        let mut delivered = 0;
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    tracing::info!(
                        target: "notifications",
                        event_type = event.kind.as_str(),
                        stand_id = %event.stand_id,
                        actor = %event.actor,
                        payload = %event.payload,
                        "Notification queued",
                    );
                    delivered += 1;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification log lagged, some events were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification log shutting down");
                    break;
                }
            }
        }
        delivered
    }
}
