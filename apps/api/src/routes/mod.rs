pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/tones", get(handlers::handle_list_tones))
        .route("/api/v1/tones/suggest", post(handlers::handle_suggest_tone))
        .route("/api/v1/posts/generate", post(handlers::handle_generate_post))
        .with_state(state)
}
