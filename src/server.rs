//! HTTP Server
//!
//! Assembles the router: search, submission, upload and health endpoints,
//! with the front end served for every other path.

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ingestion::handlers::handle_upload;
use crate::ingestion::types::ENDPOINT_UPLOAD;
use crate::query::handlers::handle_search;
use crate::storage::handlers::{handle_list_submissions, handle_submit};
use crate::storage::protocol::{ENDPOINT_SUBMISSIONS, ENDPOINT_SUBMIT};
use crate::storage::RecordStore;

pub const ENDPOINT_SEARCH: &str = "/api/search";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}

pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let index = config.static_dir.join("index.html");
    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_SUBMIT, post(handle_submit))
        .route(ENDPOINT_SUBMISSIONS, get(handle_list_submissions))
        .route(
            ENDPOINT_UPLOAD,
            post(handle_upload).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .fallback_service(frontend)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: state.store.len(),
    })
}
