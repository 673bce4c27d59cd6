//! Axum route handler for the Vision API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::vision::extractor::extract_image_text;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTextRequest {
    pub base64_image: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTextResponse {
    pub extracted_text: String,
}

/// POST /api/v1/image-text
///
/// Extracts the marketing copy visible in an uploaded creative.
pub async fn handle_image_text(
    State(state): State<AppState>,
    Json(request): Json<ImageTextRequest>,
) -> Result<Json<ImageTextResponse>, AppError> {
    if request.base64_image.trim().is_empty() || request.mime_type.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing base64Image or mimeType".to_string(),
        ));
    }
    if !request.mime_type.starts_with("image/") {
        return Err(AppError::Validation(
            "Invalid file type. Please upload an image.".to_string(),
        ));
    }

    let extracted_text =
        extract_image_text(state.llm.as_ref(), &request.base64_image, &request.mime_type).await;

    Ok(Json(ImageTextResponse { extracted_text }))
}
