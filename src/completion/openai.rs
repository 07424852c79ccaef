//! OpenAI chat completions backend.

use super::{ChatBackend, ChatChoice, ChatRequest};
use crate::config::{ApiKey, CompletionSettings};
use crate::error::{Result, VideoscribeError};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Chat backend calling the OpenAI API.
pub struct OpenAIChatBackend {
    client: Client<OpenAIConfig>,
}

impl OpenAIChatBackend {
    /// Create a backend with the given credential.
    pub fn new(api_key: &ApiKey, settings: &CompletionSettings) -> Result<Self> {
        Ok(Self {
            client: create_client(api_key, settings.timeout())?,
        })
    }
}

fn user_message(prompt: &str) -> Result<ChatCompletionRequestMessage> {
    Ok(ChatCompletionRequestUserMessageArgs::default()
        .content(prompt.to_string())
        .build()
        .map_err(|e| VideoscribeError::Upstream(e.to_string()))?
        .into())
}

#[async_trait]
impl ChatBackend for OpenAIChatBackend {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn create(&self, request: &ChatRequest) -> Result<Vec<ChatChoice>> {
        let messages = vec![user_message(&request.prompt)?];

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| VideoscribeError::Upstream(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| VideoscribeError::Upstream(e.to_string()))?;

        debug!("Completion returned {} choices", response.choices.len());

        Ok(response
            .choices
            .into_iter()
            .map(|c| ChatChoice {
                content: c.message.content,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_creation_without_key() {
        let backend = OpenAIChatBackend::new(&ApiKey::default(), &CompletionSettings::default());
        assert!(backend.is_ok());
    }

    #[test]
    fn test_prompt_becomes_user_message() {
        let message = user_message("Hi").unwrap();
        assert!(matches!(message, ChatCompletionRequestMessage::User(_)));
    }
}
