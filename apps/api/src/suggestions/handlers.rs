//! Axum route handlers for the Suggestions API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::generator::{generate_suggestions, rekey_headlines};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    pub description: String,
    pub primary_keyword: String,
    pub relevant_keywords: Vec<String>,
    /// Optional replacement keyword; when set, returned headlines are
    /// re-keyed onto it.
    #[serde(default)]
    pub new_keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub headlines: Vec<String>,
    pub keywords: Vec<String>,
}

/// POST /api/v1/suggestions
///
/// Returns five candidate headlines and 10-15 keyword suggestions for a
/// content brief.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("description is required".to_string()));
    }
    if request.primary_keyword.trim().is_empty() {
        return Err(AppError::Validation(
            "primaryKeyword is required".to_string(),
        ));
    }

    let suggestions = generate_suggestions(
        state.llm.as_ref(),
        &request.description,
        &request.primary_keyword,
        &request.relevant_keywords,
    )
    .await;

    let headlines = match request
        .new_keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
    {
        Some(new_keyword) => rekey_headlines(&suggestions.headlines, new_keyword),
        None => suggestions.headlines,
    };

    Ok(Json(SuggestionsResponse {
        headlines,
        keywords: suggestions.keywords,
    }))
}
