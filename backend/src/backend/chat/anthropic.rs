//! Anthropic Messages API client implementing [`ChatProvider`].
//!
//! Streaming uses HTTP SSE: the response body is buffered into lines, the
//! `data: ` payloads are decoded as stream events, and `text_delta` fragments
//! are forwarded to the caller.

use async_trait::async_trait;
use bytes::BytesMut;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ChatProvider, ChatProviderError, ChatTextStream};
use shared::ChatMessage;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-sonnet-4-20250514";

/// Token caps mirror the two call shapes: full chat turns versus the short
/// milestone-note reflections.
const STREAM_MAX_TOKENS: u32 = 1024;
const COMPLETE_MAX_TOKENS: u32 = 100;

pub struct AnthropicChatProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct StreamEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    delta: Option<StreamDelta>,
    #[serde(default)]
    error: Option<StreamError>,
}

#[derive(Deserialize)]
struct StreamDelta {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct StreamError {
    #[serde(default)]
    message: String,
}

/// What to do with one decoded SSE data payload.
enum StreamAction {
    Text(String),
    Stop,
    Ignore,
}

impl AnthropicChatProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    async fn post_messages(
        &self,
        request: &MessagesRequest<'_>,
    ) -> Result<reqwest::Response, ChatProviderError> {
        let url = format!("{}/v1/messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChatProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ChatProvider for AnthropicChatProvider {
    async fn stream_chat(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatTextStream, ChatProviderError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: STREAM_MAX_TOKENS,
            system: system_prompt,
            messages,
            stream: true,
        };
        let response = self.post_messages(&request).await?;
        let byte_stream = Box::pin(response.bytes_stream());

        let stream = futures::stream::unfold(
            (byte_stream, BytesMut::with_capacity(8192), false),
            |(mut stream, mut buffer, done)| async move {
                if done {
                    return None;
                }

                loop {
                    // Drain complete lines from the buffer first
                    if let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                        let mut line_bytes = buffer.split_to(newline_pos + 1);
                        line_bytes.truncate(line_bytes.len() - 1);
                        if line_bytes.last() == Some(&b'\r') {
                            line_bytes.truncate(line_bytes.len() - 1);
                        }

                        let line = match std::str::from_utf8(&line_bytes) {
                            Ok(s) => s,
                            Err(_) => continue, // skip invalid UTF-8 lines
                        };

                        let Some(data) = extract_sse_data(line) else {
                            continue;
                        };
                        match parse_stream_event(&data) {
                            Ok(StreamAction::Text(text)) => {
                                return Some((Ok(text), (stream, buffer, false)));
                            }
                            Ok(StreamAction::Stop) => return None,
                            Ok(StreamAction::Ignore) => continue,
                            Err(e) => return Some((Err(e), (stream, buffer, true))),
                        }
                    }

                    match stream.next().await {
                        Some(Ok(chunk)) => buffer.extend_from_slice(&chunk),
                        Some(Err(e)) => {
                            return Some((
                                Err(ChatProviderError::Http(e)),
                                (stream, buffer, true),
                            ));
                        }
                        None => return None,
                    }
                }
            },
        );

        Ok(Box::pin(stream))
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatProviderError> {
        let messages = [ChatMessage {
            role: "user".to_string(),
            content: user_message.to_string(),
        }];
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: COMPLETE_MAX_TOKENS,
            system: system_prompt,
            messages: &messages,
            stream: false,
        };

        let response = self.post_messages(&request).await?;
        let body: MessagesResponse = response.json().await?;
        body.content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| ChatProviderError::Malformed("empty content".to_string()))
    }
}

/// Extract the payload from an SSE `data:` line. Returns `None` for event
/// name lines, comments, and blank keep-alive lines.
fn extract_sse_data(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(':') {
        return None;
    }
    trimmed
        .strip_prefix("data:")
        .map(|rest| rest.trim_start().to_string())
        .filter(|data| !data.is_empty())
}

fn parse_stream_event(data: &str) -> Result<StreamAction, ChatProviderError> {
    let event: StreamEvent = match serde_json::from_str(data) {
        Ok(event) => event,
        Err(e) => {
            warn!("skipping unparseable stream event: {e}");
            return Ok(StreamAction::Ignore);
        }
    };

    match event.kind.as_str() {
        "content_block_delta" => match event.delta {
            Some(delta) if delta.kind == "text_delta" => Ok(StreamAction::Text(delta.text)),
            _ => Ok(StreamAction::Ignore),
        },
        "message_stop" => Ok(StreamAction::Stop),
        "error" => Err(ChatProviderError::Malformed(
            event.error.map(|e| e.message).unwrap_or_default(),
        )),
        _ => Ok(StreamAction::Ignore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_sse_data_strips_prefix() {
        assert_eq!(
            extract_sse_data("data: {\"type\":\"ping\"}"),
            Some("{\"type\":\"ping\"}".to_string())
        );
        assert_eq!(extract_sse_data("event: message_start"), None);
        assert_eq!(extract_sse_data(""), None);
        assert_eq!(extract_sse_data(": keep-alive"), None);
        assert_eq!(extract_sse_data("data:"), None);
    }

    #[test]
    fn parse_text_delta_event() {
        let data = r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hello"}}"#;
        match parse_stream_event(data).unwrap() {
            StreamAction::Text(text) => assert_eq!(text, "Hello"),
            _ => panic!("expected text action"),
        }
    }

    #[test]
    fn parse_message_stop_event() {
        let data = r#"{"type":"message_stop"}"#;
        assert!(matches!(
            parse_stream_event(data).unwrap(),
            StreamAction::Stop
        ));
    }

    #[test]
    fn parse_error_event() {
        let data = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        match parse_stream_event(data) {
            Err(ChatProviderError::Malformed(message)) => assert_eq!(message, "Overloaded"),
            other => panic!("expected malformed error, got {:?}", other.err()),
        }
    }

    #[test]
    fn parse_unknown_event_is_ignored() {
        let data = r#"{"type":"content_block_start","content_block":{"type":"text"}}"#;
        assert!(matches!(
            parse_stream_event(data).unwrap(),
            StreamAction::Ignore
        ));
        // Garbage is skipped rather than failing the stream
        assert!(matches!(
            parse_stream_event("not json").unwrap(),
            StreamAction::Ignore
        ));
    }

    #[test]
    fn request_body_shape() {
        let messages = [ChatMessage {
            role: "user".to_string(),
            content: "hi".to_string(),
        }];
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: STREAM_MAX_TOKENS,
            system: "be helpful",
            messages: &messages,
            stream: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], MODEL);
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["system"], "be helpful");
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
