//! Axum route handlers for the Headline API.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::headline::refiner::{
    generate_alternatives, refine_headline, HeadlineAlternatives, RefinedHeadline,
    DEFAULT_ALTERNATIVES_COUNT, DEFAULT_ALTERNATIVES_MAX_LENGTH, DEFAULT_REFINE_MAX_LENGTH,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineHeadlineRequest {
    pub current_headline: String,
    pub instructions: String,
    #[serde(default)]
    pub primary_keyword: Option<String>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesRequest {
    pub current_headline: String,
    pub instructions: String,
    #[serde(default)]
    pub max_length: Option<usize>,
    /// How many options to return (wire name `generateAlternatives`).
    #[serde(default)]
    pub generate_alternatives: Option<usize>,
}

/// POST /api/v1/headline/refine
///
/// Deterministic refinement: keyword integration plus case instructions.
/// Needs no LLM, so it behaves identically with and without an API key.
pub async fn handle_refine_headline(
    Json(request): Json<RefineHeadlineRequest>,
) -> Result<Json<RefinedHeadline>, AppError> {
    if request.current_headline.trim().is_empty() {
        return Err(AppError::Validation(
            "currentHeadline is required".to_string(),
        ));
    }
    if request.instructions.trim().is_empty() {
        return Err(AppError::Validation("instructions is required".to_string()));
    }

    let refined = refine_headline(
        &request.current_headline,
        &request.instructions,
        request.primary_keyword.as_deref(),
        request.max_length.unwrap_or(DEFAULT_REFINE_MAX_LENGTH),
    );
    Ok(Json(refined))
}

/// POST /api/v1/headline/alternatives
///
/// LLM-backed rewrite producing up to ten alternative headlines.
pub async fn handle_headline_alternatives(
    State(state): State<AppState>,
    Json(request): Json<AlternativesRequest>,
) -> Result<Json<HeadlineAlternatives>, AppError> {
    if request.current_headline.trim().is_empty() || request.instructions.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let result = generate_alternatives(
        state.llm.as_ref(),
        &request.current_headline,
        &request.instructions,
        request.max_length.unwrap_or(DEFAULT_ALTERNATIVES_MAX_LENGTH),
        request
            .generate_alternatives
            .unwrap_or(DEFAULT_ALTERNATIVES_COUNT),
    )
    .await?;
    Ok(Json(result))
}
