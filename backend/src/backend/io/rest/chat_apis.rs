//! The assistant chat endpoint. Replies stream back as server-sent events;
//! every failure, including a bad token or an empty message list, is
//! delivered as an `error` event on the stream so the chat page has one
//! rendering path.

use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use futures::StreamExt;
use serde_json::json;
use tracing::info;

use crate::backend::AppState;
use shared::ChatRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/my-updates/:token/chat", post(chat))
}

fn sse_event(payload: serde_json::Value) -> Result<Event, Infallible> {
    Ok(Event::default().data(payload.to_string()))
}

/// POST /api/my-updates/:token/chat — run one chat turn. Emits
/// `{"text": …}` events for each generated fragment, a final
/// `{"done": true}`, or `{"error": …}` if anything fails mid-stream.
async fn chat(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    info!("POST /chat ({} messages)", request.messages.len());
    match state.chat_service.stream_chat(&token, request).await {
        Ok(stream) => {
            let events = futures::stream::unfold((stream, false), |(mut inner, done)| async move {
                if done {
                    return None;
                }
                match inner.next().await {
                    Some(Ok(text)) => Some((sse_event(json!({ "text": text })), (inner, false))),
                    Some(Err(error)) => {
                        Some((sse_event(json!({ "error": error.to_string() })), (inner, true)))
                    }
                    None => Some((sse_event(json!({ "done": true })), (inner, true))),
                }
            });
            Sse::new(events.boxed())
                .keep_alive(KeepAlive::default())
                .into_response()
        }
        Err(error) => {
            let events =
                futures::stream::once(async move { sse_event(json!({ "error": error.to_string() })) });
            Sse::new(events.boxed()).into_response()
        }
    }
}
