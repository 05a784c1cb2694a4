//! Route definitions for display stands, mounted at `/stands`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::stands;
use crate::state::AppState;

/// ```text
/// GET    /                               -> list_stands
/// GET    /{id}                           -> get_stand
/// POST   /{id}/reservation               -> reserve_stand
/// DELETE /{id}/reservation               -> cancel_reservation
/// POST   /{id}/poster-requests           -> request_poster_change
/// PUT    /{id}/stock/{publication_id}    -> update_stock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stands::list_stands))
        .route("/{id}", get(stands::get_stand))
        .route(
            "/{id}/reservation",
            post(stands::reserve_stand).delete(stands::cancel_reservation),
        )
        .route("/{id}/poster-requests", post(stands::request_poster_change))
        .route("/{id}/stock/{publication_id}", put(stands::update_stock))
}
