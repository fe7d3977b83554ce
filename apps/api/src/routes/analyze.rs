//! Axum route handlers for the Analyze API.

use axum::{extract::Multipart, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text_from_pdf;
use crate::models::resume::ResumeRecord;
use crate::parser::analyze;

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub data: ResumeRecord,
}

/// POST /api/v1/analyze
///
/// Accepts a multipart PDF upload under the `file` field, extracts its text
/// in memory and returns the structured record.
pub async fn handle_analyze_pdf(
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string).unwrap_or_default();
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        info!("Analyzing upload '{}' ({} bytes)", filename, bytes.len());
        let text = extract_text_from_pdf(&bytes)?;
        return Ok(Json(AnalyzeResponse {
            data: analyze(&text),
        }));
    }

    Err(AppError::Validation(
        "No 'file' field in multipart body".to_string(),
    ))
}

/// POST /api/v1/analyze/text
///
/// Runs the extraction engine on already-extracted plain text. An empty
/// document is valid input and yields the all-sentinel record.
pub async fn handle_analyze_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    Ok(Json(AnalyzeResponse {
        data: analyze(&request.text),
    }))
}
