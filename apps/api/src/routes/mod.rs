pub mod analyze;
pub mod chat;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(analyze::handle_analyze_pdf))
        .route("/api/v1/analyze/text", post(analyze::handle_analyze_text))
        .route("/api/v1/chat", post(chat::handle_chat))
        .with_state(state)
}
