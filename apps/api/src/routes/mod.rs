pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::state::AppState;
use crate::taxonomy::handlers as taxonomy;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/roles", get(taxonomy::handle_list_roles))
        .route("/api/v1/taxonomy/skills", get(taxonomy::handle_list_skills))
        .route(
            "/api/v1/taxonomy/action-verbs",
            get(taxonomy::handle_list_action_verbs),
        )
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(analysis::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
