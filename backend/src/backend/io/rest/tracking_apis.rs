//! Milestone tracking endpoints: the status toggle and per-milestone notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::post;
use axum::Router;
use tracing::info;

use super::error_response;
use crate::backend::AppState;
use shared::SaveNoteRequest;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/my-updates/:token/track/:milestone_id", post(toggle))
        .route("/my-updates/:token/track/:milestone_id/notes", post(save_note))
}

/// POST /api/my-updates/:token/track/:milestone_id — advance the milestone
/// through the untracked → achieved → concern → untracked cycle.
async fn toggle(
    State(state): State<AppState>,
    Path((token, milestone_id)): Path<(String, i64)>,
) -> impl IntoResponse {
    info!("POST /track/{}", milestone_id);
    match state.tracking_service.toggle_milestone(&token, milestone_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/my-updates/:token/track/:milestone_id/notes — save a note and
/// attach an AI reflection when the provider is available. An empty note
/// clears both.
async fn save_note(
    State(state): State<AppState>,
    Path((token, milestone_id)): Path<(String, i64)>,
    Json(request): Json<SaveNoteRequest>,
) -> impl IntoResponse {
    info!("POST /track/{}/notes", milestone_id);
    match state
        .tracking_service
        .save_note(&token, milestone_id, request)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}
