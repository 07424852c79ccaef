//! OpenAI client configuration.

use crate::config::ApiKey;
use crate::error::{Result, VideoscribeError};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client with an explicit credential and optional request timeout.
pub fn create_client(api_key: &ApiKey, timeout: Option<Duration>) -> Result<Client<OpenAIConfig>> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    let http_client = builder
        .build()
        .map_err(|e| VideoscribeError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let config = OpenAIConfig::new().with_api_key(api_key.expose());

    Ok(Client::with_config(config).with_http_client(http_client))
}
