//! axum HTTP server: router, handlers, and the serve loop.
//!
//! Handlers are thin: they parse the body, hand the matching use case to the
//! blocking pool (every use case touches the file system), and serialize the
//! result.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use summary_core::SummaryService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::application::{self, ApiError};
use crate::domain::config::ApiConfig;
use crate::domain::messages::{ErrorResponse, HealthResponse, NameTopicRequest};

/// Shared state handed to every handler.
pub struct AppState {
    pub service: SummaryService,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Builds the API router around `service`.
///
/// Exposed separately from [`run_server`] so tests can drive the router
/// in-process with `tower::ServiceExt::oneshot`.
pub fn build_router(service: SummaryService) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/health", get(health))
        .route("/summaries", get(summaries))
        .route("/generate", post(generate))
        .route("/config", post(config))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves the API on `config.bind_addr` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before the function returns.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (e.g., the port is
/// already in use) or the server fails while running.
pub async fn run_server<F>(config: ApiConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    let local_addr = listener
        .local_addr()
        .context("failed to read bound address")?;
    info!("summary API listening on http://{local_addr}");

    let app = build_router(SummaryService::new(config.workspace));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

// GET /health
async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(application::health()))
}

// GET /summaries
async fn summaries(State(state): State<Arc<AppState>>) -> Response {
    respond(state, StatusCode::OK, application::list_summaries).await
}

// POST /generate
async fn generate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = NameTopicRequest::from_body(&body);
    respond(state, StatusCode::CREATED, move |service| {
        application::generate(service, &request)
    })
    .await
}

// POST /config
async fn config(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = NameTopicRequest::from_body(&body);
    respond(state, StatusCode::OK, move |service| {
        application::configure(service, &request)
    })
    .await
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Runs `use_case` on the blocking pool and converts its outcome to a
/// response with `success` as the status on the happy path.
async fn respond<T, F>(state: Arc<AppState>, success: StatusCode, use_case: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&SummaryService) -> Result<T, ApiError> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || use_case(&state.service)).await {
        Ok(Ok(body)) => (success, Json(body)).into_response(),
        Ok(Err(err)) => error_response(err),
        Err(join_err) => {
            error!("request task failed: {join_err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal server error")),
            )
                .into_response()
        }
    }
}

fn error_response(err: ApiError) -> Response {
    let status = match &err {
        ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        warn!("request failed: {err}");
    }
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
