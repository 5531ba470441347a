pub mod chat;
pub mod documents;
pub mod health;

use axum::http::{header, Method, StatusCode};
use axum::{routing::get, routing::post, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::state::AppState;
use crate::domain::DomainError;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_v1_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/documents/process", post(documents::process_documents))
        .route("/chat", post(chat::chat_handler))
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub kind: &'static str,
    pub message: String,
}

/// Maps the error taxonomy onto HTTP statuses and user-visible messages.
/// Nothing here terminates the process; every failure is reported and the
/// caller may retry its action.
pub fn error_response(err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, kind) = match &err {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
        DomainError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "extraction"),
        DomainError::NoContent => (StatusCode::UNPROCESSABLE_ENTITY, "no_content"),
        DomainError::EmbeddingProvider(_) => (StatusCode::BAD_GATEWAY, "embedding_provider"),
        DomainError::LanguageModel(_) => (StatusCode::BAD_GATEWAY, "language_model"),
        DomainError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "unexpected"),
    };

    tracing::warn!(kind, error = %err, "request failed");

    (
        status,
        Json(ErrorResponse {
            kind,
            message: err.to_string(),
        }),
    )
}
