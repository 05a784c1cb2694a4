//! Event bus and notification plumbing for the display-stand service.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`StandEvent`]: what happened to which stand, and who did it.
//! - [`NotificationLog`]: background subscriber that records one structured
//!   log line per notification-worthy event.

pub mod bus;
pub mod notifier;

pub use bus::{EventBus, EventKind, StandEvent};
pub use notifier::NotificationLog;
