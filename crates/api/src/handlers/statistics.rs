//! Read-only statistics endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use presentoir_core::views::{monthly_reservations, poster_distribution, stand_stats};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `/statistics/monthly`.
#[derive(Debug, Deserialize)]
pub struct MonthlyParams {
    /// Any day of the month to report on (`YYYY-MM-DD`); defaults to today.
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stands = state.stands.list().await;
    let publications = state.catalog.list_publications().await;

    Ok(Json(DataResponse {
        data: stand_stats(&stands, &publications),
    }))
}

/// GET /api/v1/statistics/monthly
pub async fn get_monthly_reservations(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MonthlyParams>,
) -> AppResult<impl IntoResponse> {
    let today = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let stands = state.stands.list().await;

    Ok(Json(DataResponse {
        data: monthly_reservations(&stands, today),
    }))
}

/// GET /api/v1/statistics/posters
pub async fn get_poster_distribution(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stands = state.stands.list().await;

    Ok(Json(DataResponse {
        data: poster_distribution(&stands),
    }))
}
