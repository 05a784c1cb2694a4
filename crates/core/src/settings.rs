//! Process-wide settings record.

use serde::{Deserialize, Serialize};

/// Default base URL used to build public stand links.
pub const DEFAULT_BASE_URL: &str = "https://presentoirs.example.com/stand/";

/// Default maximum reservation span in days.
pub const DEFAULT_MAX_RESERVATION_DAYS: u32 = 30;

/// Default minimum notice before a reservation may start, in hours.
pub const DEFAULT_MIN_ADVANCE_HOURS: u32 = 24;

/// Which domain events should produce an e-mail notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotifications {
    pub new_reservation: bool,
    pub poster_request: bool,
}

impl Default for EmailNotifications {
    fn default() -> Self {
        Self {
            new_reservation: true,
            poster_request: true,
        }
    }
}

/// Reservation policy and notification configuration.
///
/// Replaced wholesale on every update; there is no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_url: String,
    pub max_reservation_days: u32,
    pub min_advance_hours: u32,
    pub email_notifications: EmailNotifications,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_reservation_days: DEFAULT_MAX_RESERVATION_DAYS,
            min_advance_hours: DEFAULT_MIN_ADVANCE_HOURS,
            email_notifications: EmailNotifications::default(),
        }
    }
}

impl Settings {
    /// Public URL of a stand, `<base>/<id>` with exactly one separating slash.
    pub fn stand_url(&self, stand_id: &str) -> String {
        format!("{}/{stand_id}", self.base_url.trim_end_matches('/'))
    }
}
