//! Timeline analysis endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AnalyzeRequest, AnalyzeResponse};
use crate::extraction::analyze_text;
use crate::extraction::reference::resolve_reference;

/// `POST /api/analyze`: extract and sort the events of one note.
///
/// `reference_date` is optional; when absent or unparseable the
/// current local time is used. Extraction is CPU-bound and runs on the
/// blocking pool.
pub async fn analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    let reference = resolve_reference(request.reference_date.as_deref());

    let timeline = tokio::task::spawn_blocking(move || {
        analyze_text(&request.medical_text, reference)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Extraction task failed: {e}")))??;

    Ok(Json(AnalyzeResponse {
        success: true,
        timeline,
    }))
}
