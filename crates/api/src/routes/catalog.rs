//! Route definitions for the poster and publication catalogs.
//!
//! Merged at the `/api/v1` root since the two collections live side by side.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET    /posters             -> list_posters
/// POST   /posters             -> create_poster
/// DELETE /posters/{id}        -> delete_poster
/// GET    /publications        -> list_publications
/// POST   /publications        -> create_publication
/// DELETE /publications/{id}   -> delete_publication
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posters",
            get(catalog::list_posters).post(catalog::create_poster),
        )
        .route("/posters/{id}", delete(catalog::delete_poster))
        .route(
            "/publications",
            get(catalog::list_publications).post(catalog::create_publication),
        )
        .route("/publications/{id}", delete(catalog::delete_publication))
}
