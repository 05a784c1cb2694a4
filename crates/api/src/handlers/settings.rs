//! Handlers for the settings record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use presentoir_core::settings::{EmailNotifications, Settings};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Full replacement for [`Settings`].
///
/// The ranges mirror the inputs offered by the settings form; the store
/// itself accepts any value.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    #[validate(url)]
    pub base_url: String,
    #[validate(range(min = 1, max = 90))]
    pub max_reservation_days: u32,
    #[validate(range(max = 72))]
    pub min_advance_hours: u32,
    pub email_notifications: EmailNotifications,
}

/// GET /api/v1/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.settings.get().await,
    }))
}

/// PUT /api/v1/settings
pub async fn update_settings(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateSettings>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let settings = state
        .settings
        .update(Settings {
            base_url: input.base_url,
            max_reservation_days: input.max_reservation_days,
            min_advance_hours: input.min_advance_hours,
            email_notifications: input.email_notifications,
        })
        .await?;

    tracing::info!(
        base_url = %settings.base_url,
        max_reservation_days = settings.max_reservation_days,
        min_advance_hours = settings.min_advance_hours,
        "Settings updated",
    );

    Ok(Json(DataResponse { data: settings }))
}
