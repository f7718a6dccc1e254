pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::optimize::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Optimization API
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/optimize", post(handlers::handle_optimize))
        .route("/api/v1/render", post(handlers::handle_render))
        .fallback(not_found)
        .with_state(state)
}
