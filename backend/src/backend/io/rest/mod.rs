//! # REST API Interface Layer
//!
//! HTTP endpoints for the newsletter platform. This layer handles
//! request/response serialization, error translation from domain to HTTP
//! status codes, and request logging; business logic stays in the domain
//! services.

pub mod admin_apis;
pub mod calendar_apis;
pub mod chat_apis;
pub mod milestone_apis;
pub mod subscriber_apis;
pub mod tracking_apis;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::backend::domain::DomainError;

/// Translate a domain error into the HTTP response for it.
pub fn error_response(error: DomainError) -> Response {
    let status = match &error {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Provider(_) => StatusCode::BAD_GATEWAY,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Internal error: {:#}", error);
    }
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

#[cfg(test)]
pub mod testing {
    //! Request helpers shared by the API integration tests.

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// Fire one request at the router and decode the JSON body (Null when
    /// the body is empty or not JSON).
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// Read the raw body of one request as text (for SSE responses).
    pub async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Value,
    ) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    /// Subscribe a fresh email and return the issued access token.
    pub async fn subscribe(app: &Router, email: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/subscribe",
            None,
            Some(json!({ "email": email, "baby_name": "Mia" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"]
            .as_str()
            .expect("subscribe response missing token")
            .to_string()
    }

    /// Log in as the admin and return the bearer token.
    pub async fn admin_token(app: &Router) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/admin/login",
            None,
            Some(json!({ "username": "admin", "password": "admin123" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"]
            .as_str()
            .expect("admin login response missing token")
            .to_string()
    }
}
