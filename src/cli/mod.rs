//! CLI module for Videoscribe.

pub mod commands;
mod output;

pub use output::Output;

use crate::config::ApiKey;
use clap::{Parser, Subcommand};

/// Videoscribe - YouTube transcript and OpenAI proxy
///
/// Serves transcripts and chat completions over HTTP, or prints a single
/// transcript as JSON.
#[derive(Parser, Debug)]
#[command(name = "videoscribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP proxy
    Serve {
        /// Host to bind to (defaults to server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// OpenAI API key
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        openai_api_key: Option<ApiKey>,
    },

    /// Fetch one transcript and print it as JSON
    Transcript {
        /// YouTube video ID
        video_id: Option<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Show configuration file path
    Path,
}
