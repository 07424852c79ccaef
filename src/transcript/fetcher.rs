//! Transcript fetching on top of a [`TranscriptSource`].

use super::{TranscriptResponse, TranscriptSegment, TranscriptSource};
use crate::config::{TranscriptMode, TranscriptSettings};
use crate::error::{Result, VideoscribeError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Fetches a video's transcript and joins it into one string.
pub struct TranscriptFetcher {
    source: Arc<dyn TranscriptSource>,
    mode: TranscriptMode,
    languages: Vec<String>,
    timeout: Option<Duration>,
}

impl TranscriptFetcher {
    /// Create a fetcher with default settings.
    pub fn new(source: Arc<dyn TranscriptSource>) -> Self {
        Self::with_settings(source, &TranscriptSettings::default())
    }

    pub fn with_settings(source: Arc<dyn TranscriptSource>, settings: &TranscriptSettings) -> Self {
        Self {
            source,
            mode: settings.mode,
            languages: settings.languages.clone(),
            timeout: settings.timeout(),
        }
    }

    /// Fetch the transcript for `video_id`.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn fetch(&self, video_id: &str) -> Result<TranscriptResponse> {
        info!("Fetching transcript for video ID: {}", video_id);

        if video_id.is_empty() {
            return Err(VideoscribeError::InvalidInput("video_id required".to_string()));
        }

        let result = match self.mode {
            TranscriptMode::Generated => self.fetch_generated(video_id).await,
            TranscriptMode::Direct => self.fetch_direct(video_id).await,
        };

        if let Err(e) = &result {
            warn!("Transcript fetch for {} failed: {}", video_id, e);
        }

        result
    }

    async fn fetch_generated(&self, video_id: &str) -> Result<TranscriptResponse> {
        let variants = self.bounded(self.source.list(video_id)).await?;
        debug!("Upstream listed {} transcript variants", variants.len());

        let generated = variants
            .into_iter()
            .find(|v| v.is_generated)
            .ok_or_else(|| VideoscribeError::NotFound(video_id.to_string()))?;

        debug!("Using generated transcript in {}", generated.language_code);

        let segments = self
            .bounded(self.source.fetch(video_id, &[generated.language_code]))
            .await?;

        Ok(TranscriptResponse {
            transcript: join_segments(&segments, "\n"),
        })
    }

    async fn fetch_direct(&self, video_id: &str) -> Result<TranscriptResponse> {
        let segments = self
            .bounded(self.source.fetch(video_id, &self.languages))
            .await?;

        Ok(TranscriptResponse {
            transcript: join_segments(&segments, " "),
        })
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        let Some(limit) = self.timeout else {
            return call.await;
        };

        tokio::time::timeout(limit, call).await.map_err(|_| {
            VideoscribeError::Upstream(format!(
                "Transcript request timed out after {}s",
                limit.as_secs_f64()
            ))
        })?
    }
}

fn join_segments(segments: &[TranscriptSegment], separator: &str) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
