//! Admin surface: login, the subscriber roster, and newsletter issue
//! management. Everything except login requires the bearer token issued at
//! login.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use axum::Router;
use serde_json::json;
use tracing::{info, warn};

use super::error_response;
use crate::backend::AppState;
use shared::{
    AdminLoginRequest, AdminLoginResponse, CreateIssueRequest, SubscriberListResponse,
    TestSendRequest, UpdateIssueRequest,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/subscribers", get(list_subscribers))
        .route("/admin/issues", get(list_issues).post(create_issue))
        .route(
            "/admin/issues/:issue_id",
            get(get_issue).put(update_issue).delete(delete_issue),
        )
        .route("/admin/issues/:issue_id/test-send", post(test_send))
}

/// Check the `Authorization: Bearer` header against the auth service.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    match token.and_then(|t| state.auth.validate_token(t)) {
        Some(_) => Ok(()),
        None => {
            warn!("Rejected unauthorized admin request");
            Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthorized" })),
            )
                .into_response())
        }
    }
}

/// POST /api/admin/login — exchange credentials for a bearer token.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> impl IntoResponse {
    if !state.auth.verify(&request.username, &request.password) {
        warn!("Failed admin login for {}", request.username);
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid credentials" })),
        )
            .into_response();
    }

    let token = state.auth.issue_token(&request.username);
    info!("Admin {} logged in", request.username);
    (StatusCode::OK, Json(AdminLoginResponse { token })).into_response()
}

/// GET /api/admin/subscribers — the full roster, active and inactive.
async fn list_subscribers(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    match state.subscriber_service.list_subscribers().await {
        Ok(subscribers) => {
            (StatusCode::OK, Json(SubscriberListResponse { subscribers })).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// GET /api/admin/issues
async fn list_issues(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    match state.newsletter_service.list_issues().await {
        Ok(issues) => (StatusCode::OK, Json(issues)).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/admin/issues — create a draft issue.
async fn create_issue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateIssueRequest>,
) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    match state.newsletter_service.create_issue(request).await {
        Ok(issue) => (StatusCode::CREATED, Json(issue)).into_response(),
        Err(error) => error_response(error),
    }
}

/// GET /api/admin/issues/:issue_id
async fn get_issue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(issue_id): Path<i64>,
) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    match state.newsletter_service.get_issue(issue_id).await {
        Ok(issue) => (StatusCode::OK, Json(issue)).into_response(),
        Err(error) => error_response(error),
    }
}

/// PUT /api/admin/issues/:issue_id — partial edits; moving an issue into
/// `sent` stamps its send time.
async fn update_issue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(issue_id): Path<i64>,
    Json(request): Json<UpdateIssueRequest>,
) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    info!("PUT /admin/issues/{}", issue_id);
    match state.newsletter_service.update_issue(issue_id, request).await {
        Ok(issue) => (StatusCode::OK, Json(issue)).into_response(),
        Err(error) => error_response(error),
    }
}

/// DELETE /api/admin/issues/:issue_id — remove an issue; unknown ids are
/// NotFound.
async fn delete_issue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(issue_id): Path<i64>,
) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    info!("DELETE /admin/issues/{}", issue_id);
    match state.newsletter_service.delete_issue(issue_id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/admin/issues/:issue_id/test-send — render and deliver the
/// issue to a single test address.
async fn test_send(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(issue_id): Path<i64>,
    Json(request): Json<TestSendRequest>,
) -> impl IntoResponse {
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    info!("POST /admin/issues/{}/test-send", issue_id);
    match state.newsletter_service.test_send(issue_id, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::backend::io::rest::testing::{admin_token, send, subscribe};
    use crate::backend::testing::test_state;
    use crate::backend::create_router;

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/admin/login",
            None,
            Some(json!({ "username": "admin", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_routes_require_bearer_token() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);

        let (status, _) = send(&app, Method::GET, "/api/admin/subscribers", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            Method::GET,
            "/api/admin/subscribers",
            Some("forged"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_subscribers() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        subscribe(&app, "parent@example.com").await;
        let token = admin_token(&app).await;

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/admin/subscribers",
            Some(&token),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subscribers"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_issue_lifecycle() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = admin_token(&app).await;

        let (status, issue) = send(
            &app,
            Method::POST,
            "/api/admin/issues",
            Some(&token),
            Some(json!({
                "title": "Week 3 update",
                "subject_line": "Your week 3 guide",
                "week_number": 3
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(issue["status"], json!("draft"));
        let issue_id = issue["id"].as_i64().unwrap();

        let (status, sent) = send(
            &app,
            Method::PUT,
            &format!("/api/admin/issues/{}", issue_id),
            Some(&token),
            Some(json!({ "status": "sent" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(sent["sent_at"].as_str().is_some());

        let (status, issues) = send(&app, Method::GET, "/api/admin/issues", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(issues.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_issue() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = admin_token(&app).await;

        let (_, issue) = send(
            &app,
            Method::POST,
            "/api/admin/issues",
            Some(&token),
            Some(json!({
                "title": "Week 4 update",
                "subject_line": "Your week 4 guide",
                "week_number": 4
            })),
        )
        .await;
        let uri = format!("/api/admin/issues/{}", issue["id"].as_i64().unwrap());

        let (status, body) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], json!(true));

        let (status, _) = send(&app, Method::GET, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_test_send_delivers_to_log() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = admin_token(&app).await;

        let (_, issue) = send(
            &app,
            Method::POST,
            "/api/admin/issues",
            Some(&token),
            Some(json!({
                "title": "Week 3 update",
                "subject_line": "Your week 3 guide",
                "week_number": 3
            })),
        )
        .await;
        let issue_id = issue["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/admin/issues/{}/test-send", issue_id),
            Some(&token),
            Some(json!({ "to": "admin@example.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("logged"));
        assert!(body["delivery_id"].as_str().is_some());
    }
}
