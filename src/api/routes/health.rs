use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub session: bool,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Reports whether a processed batch is ready for questions. Not having one
/// yet is a normal state, not a failure.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let session = state.assistant.is_ready().await;
    Json(ReadinessResponse {
        status: if session {
            "ready"
        } else {
            "awaiting_documents"
        }
        .into(),
        session,
    })
}
