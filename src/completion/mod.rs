//! Chat completion relay.
//!
//! [`ChatBackend`] abstracts the completion API; [`CompletionProxy`] validates
//! the prompt, builds the request and relays the first choice.

mod openai;
mod proxy;

pub use openai::OpenAIChatBackend;
pub use proxy::{CompletionProxy, PROMPT_REQUIRED};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outbound completion request; the prompt travels as a single user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// One choice returned by the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatChoice {
    pub content: Option<String>,
}

/// Body of `POST /openai`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Relayed completion text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub result: String,
}

/// Upstream chat completion API.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Submit a request and return its choices in ranked order.
    async fn create(&self, request: &ChatRequest) -> Result<Vec<ChatChoice>>;
}
