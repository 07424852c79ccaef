//! YouTube transcript source backed by `yt-transcript-rs`.

use super::{TranscriptSegment, TranscriptSource, TranscriptVariant};
use crate::error::{Result, VideoscribeError};
use async_trait::async_trait;
use tracing::debug;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

/// Transcript source talking to YouTube directly.
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
    preserve_formatting: bool,
}

impl YoutubeTranscriptSource {
    /// Create a source without proxy or cookie authentication.
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            VideoscribeError::Config(format!("Failed to initialize transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            preserve_formatting: false,
        })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn list(&self, video_id: &str) -> Result<Vec<TranscriptVariant>> {
        let list = self
            .api
            .list_transcripts(video_id)
            .await
            .map_err(|e| classify(video_id, e))?;

        let variants: Vec<TranscriptVariant> = list
            .transcripts()
            .map(|t| TranscriptVariant {
                language_code: t.language_code().to_string(),
                language: t.language().to_string(),
                is_generated: t.is_generated(),
            })
            .collect();

        debug!("Found {} transcripts for {}", variants.len(), video_id);
        Ok(variants)
    }

    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<TranscriptSegment>> {
        let languages: Vec<&str> = languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| classify(video_id, e))?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|s| TranscriptSegment {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect())
    }
}

/// Disabled and missing transcripts become `NotFound`; anything else is passed through.
fn classify(video_id: &str, error: CouldNotRetrieveTranscript) -> VideoscribeError {
    classify_reason(video_id, error.reason.as_ref(), error.to_string())
}

fn classify_reason(
    video_id: &str,
    reason: Option<&CouldNotRetrieveTranscriptReason>,
    message: String,
) -> VideoscribeError {
    match reason {
        Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled { .. })
        | Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => {
            VideoscribeError::NotFound(video_id.to_string())
        }
        _ => VideoscribeError::Upstream(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_transcripts_are_not_found() {
        let err = classify_reason(
            "zzz",
            Some(&CouldNotRetrieveTranscriptReason::TranscriptsDisabled),
            "Subtitles are disabled for this video".to_string(),
        );
        assert!(matches!(&err, VideoscribeError::NotFound(id) if id == "zzz"));
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "No transcript available");
    }

    #[test]
    fn test_unavailable_video_is_upstream_error() {
        let err = classify_reason(
            "gone",
            Some(&CouldNotRetrieveTranscriptReason::VideoUnavailable),
            "The video is no longer available".to_string(),
        );
        assert!(matches!(err, VideoscribeError::Upstream(_)));
        assert_eq!(err.detail(), "The video is no longer available");
    }

    #[test]
    fn test_unclassified_failure_keeps_message() {
        let err = classify_reason("abc123", None, "error sending request".to_string());
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "error sending request");
    }
}
