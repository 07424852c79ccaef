//! HTTP proxy server.
//!
//! Exposes `GET /transcript` and `POST /openai`, plus a health check.

use crate::cli::Output;
use crate::completion::{CompletionProxy, CompletionRequest, CompletionResponse, OpenAIChatBackend};
use crate::config::{ApiKey, Settings};
use crate::error::VideoscribeError;
use crate::transcript::{TranscriptFetcher, TranscriptResponse, YoutubeTranscriptSource};
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

/// Shared application state.
pub struct AppState {
    pub fetcher: TranscriptFetcher,
    pub proxy: CompletionProxy,
}

/// Run the HTTP proxy.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    api_key: ApiKey,
    settings: Settings,
) -> anyhow::Result<()> {
    let source = Arc::new(YoutubeTranscriptSource::new()?);
    let backend = Arc::new(OpenAIChatBackend::new(&api_key, &settings.completion)?);

    let state = Arc::new(AppState {
        fetcher: TranscriptFetcher::with_settings(source, &settings.transcript),
        proxy: CompletionProxy::new(backend, &settings.completion),
    });

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Videoscribe Proxy");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Transcript mode", &settings.transcript.mode.to_string());
    Output::kv("Completion model", &settings.completion.model);
    if api_key.is_empty() {
        Output::warning("OPENAI_API_KEY is not set; /openai requests will fail upstream.");
    }
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Transcript", "GET  /transcript?video_id=<id>");
    Output::kv("Completion", "POST /openai");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/transcript", get(transcript))
        .route("/openai", post(openai))
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct TranscriptQuery {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for VideoscribeError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn transcript(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TranscriptQuery>,
) -> Result<Json<TranscriptResponse>, VideoscribeError> {
    let video_id = query.video_id.unwrap_or_default();
    state.fetcher.fetch(&video_id).await.map(Json)
}

/// The body is parsed as JSON whatever its Content-Type; unparseable bodies carry no prompt.
async fn openai(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CompletionResponse>, VideoscribeError> {
    let request = match serde_json::from_slice::<CompletionRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!("Unreadable completion body: {}", e);
            CompletionRequest::default()
        }
    };

    state
        .proxy
        .complete(request.prompt.as_deref())
        .await
        .map(Json)
}
