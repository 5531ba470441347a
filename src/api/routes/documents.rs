use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::routes::{error_response, ErrorResponse};
use crate::api::state::AppState;
use crate::domain::{DomainError, Message, UploadedDocument};

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub document_count: usize,
    pub chunk_count: usize,
    pub processing_time: f64,
    pub response_time: f64,
    pub history: Vec<Message>,
}

/// Accepts a multipart batch of PDF files, processes it and answers the
/// initial summary question in one interaction.
pub async fn process_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| error_response(DomainError::validation(e.to_string())))?
    {
        let name = field
            .file_name()
            .or(field.name())
            .unwrap_or_default()
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| error_response(DomainError::validation(e.to_string())))?;

        documents.push(UploadedDocument::new(name, bytes.to_vec()));
    }

    let report = state
        .assistant
        .process(&documents)
        .await
        .map_err(error_response)?;

    Ok(Json(ProcessResponse {
        document_count: report.document_count,
        chunk_count: report.chunk_count,
        processing_time: report.processing_time,
        response_time: report.response_time,
        history: report.history,
    }))
}
