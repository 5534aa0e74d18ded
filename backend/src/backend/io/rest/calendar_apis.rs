//! Family calendar endpoints: the month view and event CRUD, all scoped to
//! the subscriber behind the access token.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::backend::AppState;
use shared::CreateEventRequest;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/my-updates/:token/calendar", get(month_view))
        .route("/my-updates/:token/calendar/events", post(add_event))
        .route(
            "/my-updates/:token/calendar/events/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
}

#[derive(Deserialize)]
struct MonthQuery {
    year: Option<i32>,
    month: Option<u32>,
}

/// GET /api/my-updates/:token/calendar?year=&month= — the padded month grid
/// plus the next 30 days of events. Defaults to the current month.
async fn month_view(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    info!("GET /calendar ({:?}-{:?})", query.year, query.month);
    match state
        .calendar_service
        .month_view(&token, query.year, query.month)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/my-updates/:token/calendar/events — create an event.
async fn add_event(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<CreateEventRequest>,
) -> impl IntoResponse {
    info!("POST /calendar/events");
    match state.calendar_service.add_event(&token, request).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(error) => error_response(error),
    }
}

/// GET /api/my-updates/:token/calendar/events/:event_id
async fn get_event(
    State(state): State<AppState>,
    Path((token, event_id)): Path<(String, i64)>,
) -> impl IntoResponse {
    match state.calendar_service.get_event(&token, event_id).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(error) => error_response(error),
    }
}

/// PUT /api/my-updates/:token/calendar/events/:event_id — full update.
async fn update_event(
    State(state): State<AppState>,
    Path((token, event_id)): Path<(String, i64)>,
    Json(request): Json<CreateEventRequest>,
) -> impl IntoResponse {
    info!("PUT /calendar/events/{}", event_id);
    match state
        .calendar_service
        .update_event(&token, event_id, request)
        .await
    {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(error) => error_response(error),
    }
}

/// DELETE /api/my-updates/:token/calendar/events/:event_id — idempotent.
async fn delete_event(
    State(state): State<AppState>,
    Path((token, event_id)): Path<(String, i64)>,
) -> impl IntoResponse {
    info!("DELETE /calendar/events/{}", event_id);
    match state.calendar_service.delete_event(&token, event_id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use chrono::{Duration, Utc};
    use serde_json::json;

    use crate::backend::io::rest::testing::{send, subscribe};
    use crate::backend::testing::test_state;
    use crate::backend::create_router;

    #[tokio::test]
    async fn test_month_view_has_padded_grid() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = subscribe(&app, "parent@example.com").await;

        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/my-updates/{}/calendar?year=2026&month=8", token),
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["month_name"], json!("August"));
        assert_eq!(body["days"].as_array().unwrap().len() % 7, 0);
    }

    #[tokio::test]
    async fn test_month_view_rejects_bad_month() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = subscribe(&app, "parent@example.com").await;

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/my-updates/{}/calendar?year=2026&month=13", token),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_event_crud_round_trip() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = subscribe(&app, "parent@example.com").await;
        let date = (Utc::now().date_naive() + Duration::days(3))
            .format("%Y-%m-%d")
            .to_string();

        let (status, created) = send(
            &app,
            Method::POST,
            &format!("/api/my-updates/{}/calendar/events", token),
            None,
            Some(json!({
                "title": "Two-month checkup",
                "event_date": date,
                "event_time": "09:30",
                "category": "dr_appointment"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let event_id = created["id"].as_i64().unwrap();

        let uri = format!("/api/my-updates/{}/calendar/events/{}", token, event_id);
        let (status, fetched) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], json!("Two-month checkup"));

        let (status, updated) = send(
            &app,
            Method::PUT,
            &uri,
            None,
            Some(json!({ "title": "Two-month checkup (moved)", "event_date": date })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], json!("Two-month checkup (moved)"));

        let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_events_are_scoped_to_their_subscriber() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let owner = subscribe(&app, "owner@example.com").await;
        let other = subscribe(&app, "other@example.com").await;

        let (_, created) = send(
            &app,
            Method::POST,
            &format!("/api/my-updates/{}/calendar/events", owner),
            None,
            Some(json!({ "title": "Visit", "event_date": "2026-09-01" })),
        )
        .await;
        let event_id = created["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/my-updates/{}/calendar/events/{}", other, event_id),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_event_validates_fields() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = subscribe(&app, "parent@example.com").await;

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/my-updates/{}/calendar/events", token),
            None,
            Some(json!({ "title": "  ", "event_date": "2026-09-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/my-updates/{}/calendar/events", token),
            None,
            Some(json!({ "title": "Visit", "event_date": "09/01/2026" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
