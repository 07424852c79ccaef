//! Configuration settings for Videoscribe.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcript: TranscriptSettings,
    pub completion: CompletionSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// How a transcript variant is chosen for a video.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptMode {
    /// List variants, take the first machine-generated one, join segments with newlines.
    #[default]
    Generated,
    /// Fetch directly by preferred language, join segments with spaces.
    Direct,
}

impl std::str::FromStr for TranscriptMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generated" | "auto" => Ok(TranscriptMode::Generated),
            "direct" | "legacy" => Ok(TranscriptMode::Direct),
            _ => Err(format!("Unknown transcript mode: {}", s)),
        }
    }
}

impl std::fmt::Display for TranscriptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptMode::Generated => write!(f, "generated"),
            TranscriptMode::Direct => write!(f, "direct"),
        }
    }
}

/// Transcript retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Variant selection mode (generated, direct).
    pub mode: TranscriptMode,
    /// Preferred languages for direct mode, in priority order.
    pub languages: Vec<String>,
    /// Upper bound for each upstream transcript call, in seconds (0 = none).
    pub timeout_secs: u64,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            mode: TranscriptMode::Generated,
            languages: vec!["en".to_string()],
            timeout_secs: 30,
        }
    }
}

impl TranscriptSettings {
    /// Per-call limit; `timeout_secs = 0` disables it.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Chat completion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Model identifier sent upstream.
    pub model: String,
    /// Maximum number of tokens the model may generate.
    pub max_tokens: u32,
    /// Upper bound for each upstream completion call, in seconds (0 = none).
    pub timeout_secs: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1024,
            timeout_secs: 120,
        }
    }
}

impl CompletionSettings {
    /// Per-call limit; `timeout_secs = 0` disables it.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("videoscribe")
            .join("config.toml")
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> crate::error::Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::VideoscribeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.transcript.mode, TranscriptMode::Generated);
        assert_eq!(settings.transcript.languages, vec!["en".to_string()]);
        assert_eq!(settings.completion.model, "gpt-3.5-turbo");
        assert_eq!(settings.completion.max_tokens, 1024);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[transcript]\nmode = \"direct\"\n\n[server]\nport = 9100"
        )
        .unwrap();

        let settings = Settings::load_from(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(settings.transcript.mode, TranscriptMode::Direct);
        assert_eq!(settings.transcript.timeout_secs, 30);
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.completion.max_tokens, 1024);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.completion.timeout_secs, 120);
    }

    #[test]
    fn test_zero_timeout_means_unbounded() {
        let settings: Settings =
            toml::from_str("[transcript]\ntimeout_secs = 0\n\n[completion]\ntimeout_secs = 0").unwrap();
        assert_eq!(settings.transcript.timeout(), None);
        assert_eq!(settings.completion.timeout(), None);
        assert_eq!(
            Settings::default().transcript.timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("legacy".parse::<TranscriptMode>(), Ok(TranscriptMode::Direct));
        assert_eq!("Generated".parse::<TranscriptMode>(), Ok(TranscriptMode::Generated));
        assert!("whatever".parse::<TranscriptMode>().is_err());
        assert_eq!(TranscriptMode::Direct.to_string(), "direct");
    }
}
