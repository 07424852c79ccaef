//! Videoscribe CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use videoscribe::cli::{commands, Cli, Commands};
use videoscribe::config::Settings;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout is reserved for command output
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("videoscribe={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match cli.command {
        Commands::Serve {
            host,
            port,
            openai_api_key,
        } => {
            commands::run_serve(host, port, openai_api_key.unwrap_or_default(), settings).await?;
        }

        Commands::Transcript { video_id } => {
            return commands::run_transcript(video_id.as_deref(), settings).await;
        }

        Commands::Config { action } => {
            commands::run_config(&action, settings)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
