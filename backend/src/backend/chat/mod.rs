//! # Chat Provider
//!
//! Port for the conversational AI collaborator. Two capabilities: a streamed
//! multi-turn completion (the assistant chat) and a single-turn completion
//! (note reflections). Provider failures surface as [`ChatProviderError`] so
//! callers can decide whether to propagate or degrade.

pub mod anthropic;

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use shared::ChatMessage;

pub use anthropic::AnthropicChatProvider;

/// Lazy, finite, non-restartable sequence of generated text fragments.
pub type ChatTextStream = Pin<Box<dyn Stream<Item = Result<String, ChatProviderError>> + Send>>;

/// Errors that can occur while talking to the chat provider.
#[derive(Debug, thiserror::Error)]
pub enum ChatProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("chat provider is not configured")]
    NotConfigured,
}

/// Core chat provider trait.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Stream a multi-turn completion. The caller consumes fragments until
    /// the stream ends; dropping the stream cancels delivery.
    async fn stream_chat(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatTextStream, ChatProviderError>;

    /// Single-turn completion returning one short text result.
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatProviderError>;
}

/// Stand-in used when no API key is configured. Every call fails with
/// [`ChatProviderError::NotConfigured`]; the features that depend on the
/// provider degrade per their own contracts.
pub struct DisabledChatProvider;

#[async_trait]
impl ChatProvider for DisabledChatProvider {
    async fn stream_chat(
        &self,
        _system_prompt: &str,
        _messages: &[ChatMessage],
    ) -> Result<ChatTextStream, ChatProviderError> {
        Err(ChatProviderError::NotConfigured)
    }

    async fn complete(
        &self,
        _system_prompt: &str,
        _user_message: &str,
    ) -> Result<String, ChatProviderError> {
        Err(ChatProviderError::NotConfigured)
    }
}
