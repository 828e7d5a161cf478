//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::extract::{extract_text, DocumentKind};
use crate::analysis::models::AnalysisResult;
use crate::analysis::normalize::is_blank;
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const RESUME_FIELD: &str = "resume";

struct Upload {
    filename: String,
    bytes: Bytes,
}

/// POST /analyze
///
/// Extracts text from the uploaded PDF or DOCX and returns its evaluation.
/// A failed model call still answers 200 with the degraded payload.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let upload = read_resume_upload(&mut multipart)
        .await?
        .ok_or(AppError::NoFileUploaded)?;

    let kind = DocumentKind::from_filename(&upload.filename).ok_or(AppError::UnsupportedFileType)?;

    info!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        kind = ?kind,
        "Received resume upload"
    );

    let bytes = upload.bytes;
    let max_xml_bytes = state.config.max_document_xml_bytes();
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes, max_xml_bytes))
        .await
        .map_err(|e| anyhow::anyhow!("Text extraction task failed: {e}"))??;

    if is_blank(&text) {
        return Err(AppError::NoExtractableText);
    }

    let outcome = state.analyzer.analyze(&text).await;
    info!(degraded = outcome.is_degraded(), "Analysis complete");
    Ok(Json(outcome.into_result()))
}

/// Returns the first `resume` part that carries a filename. Parts without a
/// filename are plain form values, not uploads.
async fn read_resume_upload(multipart: &mut Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        return Ok(Some(Upload { filename, bytes }));
    }
    Ok(None)
}
