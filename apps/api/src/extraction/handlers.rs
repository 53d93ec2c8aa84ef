//! Axum route handlers for the resume upload endpoint.
//!
//! Multipart parts named `resumes` are buffered, validated as a batch, then
//! handed to the extraction pipeline.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::pipeline::{process_batch, RawDocument};
use crate::models::resume::ParseResponse;
use crate::state::AppState;

/// Multipart field carrying the uploaded files (repeated once per file).
pub const UPLOAD_FIELD: &str = "resumes";

/// POST /api/parse-resumes
pub async fn handle_parse_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let limit = state.config.max_upload_bytes;

    // The whole body is read before any document runs, so an oversized
    // upload is rejected without partial results.
    let mut documents = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        documents.push(RawDocument::new(filename, bytes));
    }

    if documents.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }
    if documents.iter().all(|doc| doc.filename.is_empty()) {
        return Err(AppError::Validation("No files selected".to_string()));
    }

    let batch_id = Uuid::new_v4();
    info!(%batch_id, files = documents.len(), "Processing resume batch");

    let results = process_batch(documents, state.limits).await;

    let succeeded = results.iter().filter(|r| r.is_success()).count();
    for failed in results.iter().filter(|r| !r.is_success()) {
        debug!(%batch_id, filename = failed.filename(), "Document failed");
    }
    info!(
        %batch_id,
        succeeded,
        failed = results.len() - succeeded,
        "Resume batch complete"
    );

    Ok(Json(ParseResponse {
        results,
        processed_at: Utc::now(),
    }))
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(format!("Malformed multipart upload: {}", e.body_text()))
    }
}
