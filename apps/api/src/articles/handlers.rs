//! Axum route handlers for the Articles API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::articles::generator::{generate_article, GenerateArticleRequest};
use crate::errors::AppError;
use crate::models::article::Article;
use crate::state::AppState;

/// Selected keyword counts accepted for generation.
const MIN_SELECTED_KEYWORDS: usize = 5;
const MAX_SELECTED_KEYWORDS: usize = 10;

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
}

/// POST /api/v1/articles
///
/// Runs the full generation pipeline and saves the finished article to the
/// front of the history before returning it.
pub async fn handle_generate_article(
    State(state): State<AppState>,
    Json(request): Json<GenerateArticleRequest>,
) -> Result<Json<ArticleResponse>, AppError> {
    if request.description.trim().is_empty()
        || request.primary_keyword.trim().is_empty()
        || request.selected_headline.trim().is_empty()
    {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }
    if request.selected_keywords.len() < MIN_SELECTED_KEYWORDS
        || request.selected_keywords.len() > MAX_SELECTED_KEYWORDS
    {
        return Err(AppError::Validation(
            "Please select 5-10 keywords for optimal results".to_string(),
        ));
    }

    let article = generate_article(state.llm.as_ref(), &request).await?;
    state.store.save(article.clone()).await;

    Ok(Json(ArticleResponse { article }))
}

/// GET /api/v1/articles — the history, newest first.
pub async fn handle_list_articles(State(state): State<AppState>) -> Json<ArticleListResponse> {
    Json(ArticleListResponse {
        articles: state.store.list().await,
    })
}

/// GET /api/v1/articles/:id
pub async fn handle_get_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArticleResponse>, AppError> {
    let article = state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Article {id} not found")))?;
    Ok(Json(ArticleResponse { article }))
}

/// DELETE /api/v1/articles/:id
pub async fn handle_delete_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Article {id} not found")))
    }
}
