//! Videoscribe - YouTube transcript and OpenAI proxy
//!
//! A small HTTP service with two independent endpoints:
//!
//! - `GET /transcript?video_id=<id>` returns a video's machine-generated
//!   transcript as one newline-joined string.
//! - `POST /openai` forwards `{"prompt": ...}` to a chat completion model and
//!   relays the first choice.
//!
//! # Architecture
//!
//! - `config` - Settings file and the OpenAI credential
//! - `transcript` - Transcript source abstraction and fetcher
//! - `completion` - Chat backend abstraction and prompt proxy
//! - `cli` - Command line and HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use videoscribe::transcript::{TranscriptFetcher, YoutubeTranscriptSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = TranscriptFetcher::new(Arc::new(YoutubeTranscriptSource::new()?));
//!     let response = fetcher.fetch("dQw4w9WgXcQ").await?;
//!     println!("{}", response.transcript);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod openai;
pub mod transcript;

pub use error::{Result, VideoscribeError};
