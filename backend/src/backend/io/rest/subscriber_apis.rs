//! Subscriber lifecycle endpoints: signup, passwordless login, unsubscribe,
//! and the neighborhood profile field.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::post;
use axum::Router;
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::backend::AppState;
use shared::{SaveNeighborhoodRequest, SubscribeRequest, SubscriberLoginRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/login", post(login))
        .route("/unsubscribe/:token", post(unsubscribe))
        .route("/my-updates/:token/neighborhood", post(save_neighborhood))
}

/// POST /api/subscribe — create or revive a subscription.
async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> impl IntoResponse {
    info!("POST /subscribe");
    match state.subscriber_service.subscribe(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/login — resolve an active subscriber's email to their token.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<SubscriberLoginRequest>,
) -> impl IntoResponse {
    info!("POST /login");
    match state.subscriber_service.login(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/unsubscribe/:token — deactivate a subscription. Stale tokens
/// still return 200 with `found: false`.
async fn unsubscribe(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> impl IntoResponse {
    info!("POST /unsubscribe");
    match state.subscriber_service.unsubscribe(&token).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

/// POST /api/my-updates/:token/neighborhood — save or clear the subscriber's
/// neighborhood.
async fn save_neighborhood(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<SaveNeighborhoodRequest>,
) -> impl IntoResponse {
    match state.subscriber_service.save_neighborhood(&token, request).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "saved": true }))).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::backend::io::rest::testing::{send, subscribe};
    use crate::backend::testing::test_state;
    use crate::backend::create_router;

    #[tokio::test]
    async fn test_subscribe_endpoint_issues_token() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/subscribe",
            None,
            Some(json!({ "email": "parent@example.com", "baby_name": "Mia" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["token"].as_str().is_some());
        assert_eq!(body["reactivated"], json!(false));
    }

    #[tokio::test]
    async fn test_subscribe_rejects_invalid_email() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/subscribe",
            None,
            Some(json!({ "email": "no-at-sign" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = subscribe(&app, "parent@example.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "email": "parent@example.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token"], json!(token));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_404() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "email": "nobody@example.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsubscribe_stale_token_still_succeeds() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);

        let (status, body) =
            send(&app, Method::POST, "/api/unsubscribe/stale", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["found"], json!(false));
    }

    #[tokio::test]
    async fn test_save_neighborhood() {
        let (state, _guard) = test_state().await;
        let app = create_router(state);
        let token = subscribe(&app, "parent@example.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/my-updates/{}/neighborhood", token),
            None,
            Some(json!({ "neighborhood": "Park Slope" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], json!(true));
    }
}
