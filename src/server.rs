use crate::captcha::Captcha;
use crate::config::Config;
use crate::engine::CaptchaEngine;
use crate::error::CaptchaError;
use crate::format;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub captcha: Arc<Captcha>,
    pub config: Arc<Config>,
}

/// Recognition response
#[derive(Serialize)]
pub struct RecognizeResponse {
    pub text: String,
    pub processing_time_ms: u64,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Server info response
#[derive(Serialize)]
pub struct InfoResponse {
    pub version: String,
    pub engine: String,
    pub characters: Vec<char>,
    pub template_count: usize,
    pub sample_counts: BTreeMap<char, usize>,
    pub max_body_size_bytes: usize,
}

/// Build the router over already-trained state
pub fn router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    Router::new()
        .route("/recognize", post(handle_recognize))
        .route("/health", get(handle_health))
        .route("/info", get(handle_info))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Train templates and run the HTTP server
pub async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Training templates from {} and {}",
        config.input_dir.display(),
        config.output_dir.display()
    );
    let captcha = Captcha::from_dirs(&config.input_dir, &config.output_dir)?;
    let engine = captcha.engine();
    tracing::info!("Using {} engine: {}", engine.name(), engine.description());
    let addr = format!("{}:{}", config.host, config.port);

    let app = router(AppState {
        captcha: Arc::new(captcha),
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Handle recognition requests; the body is pixel-grid text
async fn handle_recognize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecognizeResponse>, CaptchaError> {
    let start = Instant::now();

    let body = std::str::from_utf8(&body)
        .map_err(|e| CaptchaError::InvalidRequest(format!("Body is not UTF-8 text: {}", e)))?;
    if body.trim().is_empty() {
        return Err(CaptchaError::MissingBody);
    }

    let image = format::parse_image(body)?;
    let recognition = state.captcha.recognize(&image)?;

    let processing_time_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Recognized {:?} in {}ms",
        recognition.text,
        processing_time_ms
    );

    Ok(Json(RecognizeResponse {
        text: recognition.text,
        processing_time_ms,
    }))
}

/// Handle health check requests
async fn handle_health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle info requests
async fn handle_info(State(state): State<AppState>) -> impl IntoResponse {
    let templates = state.captcha.templates();
    let characters = templates.characters();
    let sample_counts = characters
        .iter()
        .filter_map(|&c| templates.sample_count(c).map(|n| (c, n)))
        .collect();

    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine: state.captcha.engine().name().to_string(),
        template_count: templates.len(),
        characters,
        sample_counts,
        max_body_size_bytes: state.config.max_body_size,
    })
}
