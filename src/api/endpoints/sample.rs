use axum::Json;

use crate::api::types::SampleResponse;
use crate::extraction::sample::SAMPLE_NOTE;

/// `GET /api/sample`: demonstration note for trying out the analyzer.
pub async fn sample() -> Json<SampleResponse> {
    Json(SampleResponse {
        sample_text: SAMPLE_NOTE,
    })
}
