pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::portfolio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);
    let max_body = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route("/api/v1/portfolio/submit", post(handlers::handle_submit))
        .route(
            "/api/v1/portfolio/generate",
            post(handlers::handle_generate),
        )
        .route(
            "/api/v1/portfolio/download/:filename",
            get(handlers::handle_download),
        )
        // Uploaded photos are public by URL
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}
