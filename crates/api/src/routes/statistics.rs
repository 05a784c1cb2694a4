//! Route definitions for statistics, mounted at `/statistics`.

use axum::routing::get;
use axum::Router;

use crate::handlers::statistics;
use crate::state::AppState;

/// ```text
/// GET /monthly   -> get_monthly_reservations
/// GET /posters   -> get_poster_distribution
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/monthly", get(statistics::get_monthly_reservations))
        .route("/posters", get(statistics::get_poster_distribution))
}
