pub mod catalog;
pub mod health;
pub mod poster_requests;
pub mod public;
pub mod settings;
pub mod stands;
pub mod statistics;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stands                                  list
/// /stands/{id}                             get
/// /stands/{id}/reservation                 reserve (POST), cancel (DELETE)
/// /stands/{id}/poster-requests             request poster change (POST)
/// /stands/{id}/stock/{publication_id}      update stock (PUT)
///
/// /poster-requests                         feed, newest first
/// /poster-requests/{id}/approve            approve (POST)
/// /poster-requests/{id}/reject             reject (POST)
///
/// /stats                                   dashboard counters
/// /statistics/monthly                      daily reserved counts (?date=YYYY-MM-DD)
/// /statistics/posters                      stands per current poster
///
/// /posters                                 list, create
/// /posters/{id}                            delete
/// /publications                            list, create
/// /publications/{id}                       delete
///
/// /settings                                get, replace (PUT)
///
/// /public/stands/{id}                      public single-stand view
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/stands", stands::router())
        .nest("/poster-requests", poster_requests::router())
        .route("/stats", get(handlers::statistics::get_stats))
        .nest("/statistics", statistics::router())
        .merge(catalog::router())
        .nest("/settings", settings::router())
        .nest("/public", public::router())
}
