use serde::{Deserialize, Serialize};

use super::core::{send_json, ApiError};

/// Request body for AI note generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub template_id: String,
    pub note_id: String,
}

/// Response from the generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub generated_note: String,
    pub template_used: String,
    pub timestamp: String,
    pub note_id: String,
}

pub async fn generate_response(request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
    send_json("POST", "/generate", request, "Failed to generate response").await
}
