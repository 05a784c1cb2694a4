//! Public single-stand view, reached by scanning a stand's QR code.
//!
//! Exposes only what a passer-by needs: where the stand is, who holds it,
//! and which action the public page offers. No stock levels, no request
//! queue, and no mutations.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use presentoir_core::error::CoreError;
use presentoir_core::stand::DisplayStand;
use presentoir_core::types::{EntityId, Timestamp};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// The single action offered on the public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicAction {
    Reserve,
    RequestPosterChange,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStandView {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub is_reserved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_until: Option<Timestamp>,
    pub public_url: String,
    pub action: PublicAction,
}

impl PublicStandView {
    fn new(stand: DisplayStand, public_url: String) -> Self {
        let action = if stand.is_reserved {
            PublicAction::RequestPosterChange
        } else {
            PublicAction::Reserve
        };

        Self {
            id: stand.id,
            name: stand.name,
            location: stand.location,
            is_reserved: stand.is_reserved,
            reserved_by: stand.reserved_by,
            reserved_until: stand.reserved_until,
            public_url,
            action,
        }
    }
}

/// GET /api/v1/public/stands/{id}
pub async fn get_public_stand(
    State(state): State<AppState>,
    Path(stand_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let stand = state
        .stands
        .get(&stand_id)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("DisplayStand", &stand_id)))?;
    let public_url = state.settings.get().await.stand_url(&stand.id);

    Ok(Json(DataResponse {
        data: PublicStandView::new(stand, public_url),
    }))
}
