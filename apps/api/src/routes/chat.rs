use axum::Json;
use serde::{Deserialize, Serialize};

use crate::assistant;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: assistant::reply(&request.message).to_string(),
    })
}
