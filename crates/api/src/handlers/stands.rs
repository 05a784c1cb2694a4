//! Handlers for the display-stand dashboard.
//!
//! Listing, reservation, poster-change requests and stock updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use presentoir_core::catalog::Publication;
use presentoir_core::error::CoreError;
use presentoir_core::reservation::{check_reservation, ReservationForm};
use presentoir_core::settings::Settings;
use presentoir_core::stand::DisplayStand;
use presentoir_core::types::{EntityId, Timestamp};
use presentoir_core::views::has_low_stock;
use presentoir_events::{EventKind, StandEvent};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// A stand as listed on the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandView {
    #[serde(flatten)]
    pub stand: DisplayStand,
    pub low_stock: bool,
    /// Link encoded in the stand's QR code.
    pub public_url: String,
}

impl StandView {
    pub fn new(stand: DisplayStand, publications: &[Publication], settings: &Settings) -> Self {
        Self {
            low_stock: has_low_stock(&stand, publications),
            public_url: settings.stand_url(&stand.id),
            stand,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PosterChangeRequest {
    #[validate(length(min = 1, max = 200))]
    pub requested_poster: String,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StockUpdate {
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/stands
pub async fn list_stands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stands = state.stands.list().await;
    let publications = state.catalog.list_publications().await;
    let settings = state.settings.get().await;

    let data: Vec<StandView> = stands
        .into_iter()
        .map(|stand| StandView::new(stand, &publications, &settings))
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/stands/{id}
pub async fn get_stand(
    State(state): State<AppState>,
    Path(stand_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let stand = state
        .stands
        .get(&stand_id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("DisplayStand", &stand_id)))?;
    let publications = state.catalog.list_publications().await;
    let settings = state.settings.get().await;

    Ok(Json(DataResponse {
        data: StandView::new(stand, &publications, &settings),
    }))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/stands/{id}/reservation
///
/// Checks the reservation policy from the current settings before booking.
pub async fn reserve_stand(
    State(state): State<AppState>,
    Path(stand_id): Path<EntityId>,
    AppJson(input): AppJson<ReserveRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let form = ReservationForm {
        name: input.name.trim().to_string(),
        start_date: input.start_date,
        end_date: input.end_date,
    };

    let settings = state.settings.get().await;
    check_reservation(&form, &settings, Utc::now())?;

    let stand = state.stands.reserve(&stand_id, &form).await?;

    tracing::info!(
        stand_id = %stand.id,
        reserved_by = %form.name,
        reserved_until = %form.end_date,
        "Stand reserved",
    );

    if settings.email_notifications.new_reservation {
        state.event_bus.publish(StandEvent::new(
            EventKind::StandReserved,
            stand.id.clone(),
            form.name.clone(),
            json!({
                "standName": stand.name,
                "startDate": form.start_date,
                "endDate": form.end_date,
            }),
        ));
    }

    Ok(Json(DataResponse { data: stand }))
}

/// DELETE /api/v1/stands/{id}/reservation
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(stand_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let stand = state.stands.cancel_reservation(&stand_id).await?;

    tracing::info!(stand_id = %stand.id, "Reservation cancelled");

    Ok(Json(DataResponse { data: stand }))
}

/// POST /api/v1/stands/{id}/poster-requests
///
/// Only a reserved stand accepts requests; the requester is its holder.
pub async fn request_poster_change(
    State(state): State<AppState>,
    Path(stand_id): Path<EntityId>,
    AppJson(input): AppJson<PosterChangeRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let request = state
        .stands
        .request_poster_change(&stand_id, &input.requested_poster, input.notes.as_deref())
        .await?;

    tracing::info!(
        stand_id = %request.stand_id,
        request_id = %request.id,
        requested_poster = %request.requested_poster,
        "Poster change requested",
    );

    if state.settings.get().await.email_notifications.poster_request {
        state.event_bus.publish(StandEvent::new(
            EventKind::PosterRequestCreated,
            request.stand_id.clone(),
            request.requested_by.clone(),
            json!({
                "requestId": request.id,
                "requestedPoster": request.requested_poster,
                "notes": request.notes,
            }),
        ));
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// PUT /api/v1/stands/{id}/stock/{publication_id}
pub async fn update_stock(
    State(state): State<AppState>,
    Path((stand_id, publication_id)): Path<(EntityId, EntityId)>,
    AppJson(input): AppJson<StockUpdate>,
) -> AppResult<impl IntoResponse> {
    let stand = state
        .stands
        .update_stock(&stand_id, &publication_id, input.quantity)
        .await?;

    tracing::info!(
        stand_id = %stand.id,
        publication_id = %publication_id,
        quantity = input.quantity,
        "Stock updated",
    );

    let publications = state.catalog.list_publications().await;
    let settings = state.settings.get().await;

    Ok(Json(DataResponse {
        data: StandView::new(stand, &publications, &settings),
    }))
}
