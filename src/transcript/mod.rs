//! Transcript retrieval.
//!
//! [`TranscriptSource`] abstracts the upstream that lists and fetches YouTube
//! captions; [`TranscriptFetcher`] turns one of those into a single text blob.

mod fetcher;
mod youtube;

pub use fetcher::TranscriptFetcher;
pub use youtube::YoutubeTranscriptSource;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One transcript available for a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptVariant {
    /// Language code used to fetch this variant (e.g. "en").
    pub language_code: String,
    /// Human-readable language name.
    pub language: String,
    /// Whether YouTube generated it automatically.
    pub is_generated: bool,
}

/// A single timed caption entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Transcript text returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

/// Upstream capable of listing and fetching video transcripts.
///
/// Implementations report disabled or missing transcripts as
/// [`VideoscribeError::NotFound`](crate::error::VideoscribeError::NotFound) and
/// everything else as `Upstream`.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// List available variants in upstream order.
    async fn list(&self, video_id: &str) -> Result<Vec<TranscriptVariant>>;

    /// Fetch segments for the first of `languages` the video has, in playback order.
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<TranscriptSegment>>;
}
