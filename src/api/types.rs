//! Request and response bodies for the timeline API.

use serde::{Deserialize, Serialize};

use crate::timeline::Timeline;

/// Body of `POST /api/analyze`.
///
/// A missing `medical_text` deserializes to the empty string so that it
/// is reported the same way as blank text.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub medical_text: String,
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Successful analysis: the sorted timeline flattened next to `success`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub timeline: Timeline,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleResponse {
    pub sample_text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
