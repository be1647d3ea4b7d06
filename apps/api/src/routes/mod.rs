pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::boost::handlers::{handle_boost, handle_vibe};
use crate::generation::handlers::handle_generate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/healthz", get(health::health_handler))
        // Caption generation (model-backed)
        .route("/api/generate", post(handle_generate))
        // Boost + vibe (model-free)
        .route("/api/boost", post(handle_boost))
        .route("/api/vibe", post(handle_vibe))
        .with_state(state)
}
