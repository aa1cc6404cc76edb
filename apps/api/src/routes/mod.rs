pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Legacy unversioned path
        .route("/analyze", post(analysis::handle_analyze))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(analysis::handle_analyze_upload),
        )
        // Extraction API
        .route("/api/v1/resumes/extract", post(extraction::handle_extract))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
