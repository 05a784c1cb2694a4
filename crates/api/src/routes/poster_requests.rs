//! Route definitions for the poster-request queue, mounted at `/poster-requests`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::poster_requests;
use crate::state::AppState;

/// ```text
/// GET  /                -> list_poster_requests
/// POST /{id}/approve    -> approve_poster_request
/// POST /{id}/reject     -> reject_poster_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(poster_requests::list_poster_requests))
        .route(
            "/{id}/approve",
            post(poster_requests::approve_poster_request),
        )
        .route("/{id}/reject", post(poster_requests::reject_poster_request))
}
