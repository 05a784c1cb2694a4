//! Reservation requests and the booking policy derived from [`Settings`].
//!
//! The stores accept any reservation; the request layer runs
//! [`check_reservation`] first so that the policy knobs configured in the
//! settings (maximum span, minimum notice) are honoured.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::settings::Settings;
use crate::types::Timestamp;

/// A booking request for a single stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Validate a reservation against the configured policy.
pub fn check_reservation(
    form: &ReservationForm,
    settings: &Settings,
    now: Timestamp,
) -> Result<(), CoreError> {
    if form.name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Reservation holder name is required".to_string(),
        ));
    }

    if form.end_date < form.start_date {
        return Err(CoreError::Validation(
            "Reservation end date must not precede its start date".to_string(),
        ));
    }

    let max_span = TimeDelta::try_days(i64::from(settings.max_reservation_days))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Maximum reservation length of {} days is out of range",
                settings.max_reservation_days
            ))
        })?;
    if form.end_date - form.start_date > max_span {
        return Err(CoreError::Validation(format!(
            "Reservation cannot exceed {} days",
            settings.max_reservation_days
        )));
    }

    let earliest_start = TimeDelta::try_hours(i64::from(settings.min_advance_hours))
        .and_then(|notice| now.checked_add_signed(notice))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Minimum advance notice of {} hours is out of range",
                settings.min_advance_hours
            ))
        })?;
    if form.start_date < earliest_start {
        return Err(CoreError::Validation(format!(
            "Reservation must start at least {} hours from now",
            settings.min_advance_hours
        )));
    }

    Ok(())
}
