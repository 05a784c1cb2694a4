//! Handlers for the poster-request review queue.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use presentoir_core::types::EntityId;
use presentoir_core::views::poster_request_feed;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/poster-requests
///
/// Every request across all stands, newest first, tagged with the stand name.
pub async fn list_poster_requests(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stands = state.stands.list().await;
    Ok(Json(DataResponse {
        data: poster_request_feed(&stands),
    }))
}

/// POST /api/v1/poster-requests/{id}/approve
///
/// Marks the request approved and puts its poster on the owning stand.
pub async fn approve_poster_request(
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let request = state.stands.approve_poster_request(&request_id).await?;

    tracing::info!(
        request_id = %request.id,
        stand_id = %request.stand_id,
        poster = %request.requested_poster,
        "Poster request approved",
    );

    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/poster-requests/{id}/reject
pub async fn reject_poster_request(
    State(state): State<AppState>,
    Path(request_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let request = state.stands.reject_poster_request(&request_id).await?;

    tracing::info!(
        request_id = %request.id,
        stand_id = %request.stand_id,
        "Poster request rejected",
    );

    Ok(Json(DataResponse { data: request }))
}
