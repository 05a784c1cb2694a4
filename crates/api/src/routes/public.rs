//! Public routes, mounted at `/public`. Read-only.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// ```text
/// GET /stands/{id}  -> get_public_stand
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/stands/{id}", get(public::get_public_stand))
}
