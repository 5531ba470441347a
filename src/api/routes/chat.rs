use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::routes::{error_response, ErrorResponse};
use crate::api::state::AppState;
use crate::domain::Message;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub history: Vec<Message>,
    /// Wall-clock seconds the language model call took; a user-visible
    /// diagnostic, not a correctness signal.
    pub response_time: f64,
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let outcome = state
        .assistant
        .ask(&request.question)
        .await
        .map_err(error_response)?;

    Ok(Json(ChatResponse {
        history: outcome.history,
        response_time: outcome.response_time,
    }))
}
