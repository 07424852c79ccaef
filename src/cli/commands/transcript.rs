//! One-shot transcript fetch printing JSON to stdout.

use crate::config::Settings;
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptSource};
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;

/// JSON written to stdout.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
enum TranscriptOutput {
    Transcript { transcript: String },
    Error { error: String },
}

/// Run the transcript command.
pub async fn run_transcript(video_id: Option<&str>, settings: Settings) -> anyhow::Result<ExitCode> {
    let output = match YoutubeTranscriptSource::new() {
        Ok(source) => {
            let fetcher = TranscriptFetcher::with_settings(Arc::new(source), &settings.transcript);
            fetch_output(&fetcher, video_id).await
        }
        Err(e) => TranscriptOutput::Error {
            error: e.detail(),
        },
    };

    println!("{}", serde_json::to_string(&output)?);

    Ok(match output {
        TranscriptOutput::Transcript { .. } => ExitCode::SUCCESS,
        TranscriptOutput::Error { .. } => ExitCode::FAILURE,
    })
}

async fn fetch_output(fetcher: &TranscriptFetcher, video_id: Option<&str>) -> TranscriptOutput {
    let video_id = match video_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            return TranscriptOutput::Error {
                error: "No video ID provided".to_string(),
            }
        }
    };

    match fetcher.fetch(video_id).await {
        Ok(response) => TranscriptOutput::Transcript {
            transcript: response.transcript,
        },
        Err(e) => TranscriptOutput::Error { error: e.detail() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TranscriptMode, TranscriptSettings};
    use crate::error::{Result, VideoscribeError};
    use crate::transcript::{TranscriptSegment, TranscriptSource, TranscriptVariant};
    use async_trait::async_trait;

    struct StubSource;

    #[async_trait]
    impl TranscriptSource for StubSource {
        async fn list(&self, video_id: &str) -> Result<Vec<TranscriptVariant>> {
            if video_id == "disabled" {
                return Err(VideoscribeError::NotFound(video_id.to_string()));
            }
            Ok(vec![TranscriptVariant {
                language_code: "en".to_string(),
                language: "English".to_string(),
                is_generated: true,
            }])
        }

        async fn fetch(&self, video_id: &str, _languages: &[String]) -> Result<Vec<TranscriptSegment>> {
            if video_id == "offline" {
                return Err(VideoscribeError::Upstream("error sending request".to_string()));
            }
            Ok(vec![
                TranscriptSegment::new("never gonna", 0.0, 1.0),
                TranscriptSegment::new("give you up", 1.0, 1.0),
            ])
        }
    }

    fn fetcher(mode: TranscriptMode) -> TranscriptFetcher {
        let settings = TranscriptSettings {
            mode,
            ..TranscriptSettings::default()
        };
        TranscriptFetcher::with_settings(Arc::new(StubSource), &settings)
    }

    #[tokio::test]
    async fn test_missing_video_id() {
        let output = fetch_output(&fetcher(TranscriptMode::Generated), None).await;
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"error":"No video ID provided"}"#
        );
    }

    #[tokio::test]
    async fn test_success_output() {
        let output = fetch_output(&fetcher(TranscriptMode::Generated), Some("abc123")).await;
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"transcript":"never gonna\ngive you up"}"#
        );
    }

    #[tokio::test]
    async fn test_direct_mode_output() {
        let output = fetch_output(&fetcher(TranscriptMode::Direct), Some("abc123")).await;
        assert_eq!(
            output,
            TranscriptOutput::Transcript {
                transcript: "never gonna give you up".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_outputs() {
        let output = fetch_output(&fetcher(TranscriptMode::Generated), Some("disabled")).await;
        assert_eq!(
            output,
            TranscriptOutput::Error {
                error: "No transcript available".to_string()
            }
        );

        let output = fetch_output(&fetcher(TranscriptMode::Generated), Some("offline")).await;
        assert_eq!(
            output,
            TranscriptOutput::Error {
                error: "error sending request".to_string()
            }
        );
    }
}
