//! Handlers for poster and publication catalog management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use presentoir_core::catalog::{NewPoster, NewPublication};
use presentoir_core::types::EntityId;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoster {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublication {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "default_min_stock")]
    pub min_stock: u32,
}

fn default_active() -> bool {
    true
}

fn default_min_stock() -> u32 {
    10
}

// ---------------------------------------------------------------------------
// Posters
// ---------------------------------------------------------------------------

/// GET /api/v1/posters
pub async fn list_posters(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.list_posters().await,
    }))
}

/// POST /api/v1/posters
pub async fn create_poster(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePoster>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let poster = state
        .catalog
        .add_poster(NewPoster {
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            category: input.category,
            is_active: input.is_active,
        })
        .await?;

    tracing::info!(poster_id = %poster.id, name = %poster.name, "Poster created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: poster })))
}

/// DELETE /api/v1/posters/{id}
///
/// Stands currently showing the poster keep its name.
pub async fn delete_poster(
    State(state): State<AppState>,
    Path(poster_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let poster = state.catalog.delete_poster(&poster_id).await?;

    tracing::info!(poster_id = %poster.id, name = %poster.name, "Poster deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Publications
// ---------------------------------------------------------------------------

/// GET /api/v1/publications
pub async fn list_publications(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.list_publications().await,
    }))
}

/// POST /api/v1/publications
pub async fn create_publication(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePublication>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let publication = state
        .catalog
        .add_publication(NewPublication {
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            category: input.category,
            is_active: input.is_active,
            min_stock: input.min_stock,
        })
        .await?;

    tracing::info!(
        publication_id = %publication.id,
        title = %publication.title,
        min_stock = publication.min_stock,
        "Publication created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: publication })))
}

/// DELETE /api/v1/publications/{id}
pub async fn delete_publication(
    State(state): State<AppState>,
    Path(publication_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let publication = state.catalog.delete_publication(&publication_id).await?;

    tracing::info!(publication_id = %publication.id, "Publication deleted");

    Ok(StatusCode::NO_CONTENT)
}
