//! The personalized updates page: everything a subscriber sees for one week.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use super::error_response;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/my-updates/:token", get(my_updates))
}

#[derive(Deserialize)]
struct MyUpdatesQuery {
    week: Option<i64>,
}

/// GET /api/my-updates/:token?week=N — the week snapshot: grouped
/// milestones, tracking rows, progress counters, and newsletter content.
/// Omitting `week` resolves to the baby's current week.
async fn my_updates(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<MyUpdatesQuery>,
) -> impl IntoResponse {
    info!("GET /my-updates (week {:?})", query.week);
    match state.milestone_service.my_updates(&token, query.week).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}
