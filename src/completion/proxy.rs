//! Prompt validation and first-choice relay.

use super::{ChatBackend, ChatRequest, CompletionResponse};
use crate::config::CompletionSettings;
use crate::error::{Result, VideoscribeError};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Detail returned when a request has no usable prompt.
pub const PROMPT_REQUIRED: &str = "Prompt required";

/// Forwards a single user prompt to a [`ChatBackend`].
pub struct CompletionProxy {
    backend: Arc<dyn ChatBackend>,
    model: String,
    max_tokens: u32,
}

impl CompletionProxy {
    pub fn new(backend: Arc<dyn ChatBackend>, settings: &CompletionSettings) -> Self {
        Self {
            backend,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        }
    }

    /// Relay `prompt` and return the first choice's content unchanged.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn complete(&self, prompt: Option<&str>) -> Result<CompletionResponse> {
        let prompt = match prompt {
            Some(p) if !p.is_empty() => p,
            _ => return Err(VideoscribeError::InvalidInput(PROMPT_REQUIRED.to_string())),
        };

        let request = ChatRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
        };

        let choices = self.backend.create(&request).await.map_err(|e| {
            warn!("Completion request failed: {}", e);
            e
        })?;

        let result = choices
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .ok_or_else(|| {
                VideoscribeError::Upstream("Empty response from completion API".to_string())
            })?;

        Ok(CompletionResponse { result })
    }
}
