//! Configuration module for Videoscribe.
//!
//! Settings come from a TOML file; the OpenAI credential comes from the environment.

mod credentials;
mod settings;

pub use credentials::ApiKey;
pub use settings::{
    CompletionSettings, ServerSettings, Settings, TranscriptMode, TranscriptSettings,
};
