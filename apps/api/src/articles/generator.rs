//! Article Generation — the full drafting pipeline.
//!
//! Flow: draft the body via Gemini (mock body when no client is
//! configured), strip any leading H1 the model added, score the cleaned
//! body with the metrics engine, then assemble the `Article` for the
//! history store. Metrics always describe the cleaned body, never the raw
//! model output.

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::articles::mock::mock_article_body;
use crate::articles::prompts::ARTICLE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{GeminiClient, GenerationConfig};
use crate::models::article::Article;
use crate::seo::metrics::compute_metrics;

/// Generated bodies under this length are suspicious enough to log.
const SHORT_CONTENT_CHARS: usize = 500;

/// Request body for article generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArticleRequest {
    pub description: String,
    pub primary_keyword: String,
    pub selected_headline: String,
    pub selected_keywords: Vec<String>,
}

/// Runs the drafting pipeline and returns the assembled article.
pub async fn generate_article(
    llm: Option<&GeminiClient>,
    request: &GenerateArticleRequest,
) -> Result<Article, AppError> {
    let body = match llm {
        Some(llm) => draft_with_gemini(llm, request).await?,
        None => {
            info!("No Gemini API key configured, using mock article body");
            mock_article_body(&request.primary_keyword, &request.selected_keywords)
        }
    };

    let content = strip_leading_h1(&body);

    let metrics = compute_metrics(content, &request.primary_keyword, &request.selected_keywords);
    info!(
        "Generated article: {} words, SEO score {}",
        metrics.word_count, metrics.seo_score
    );

    Ok(Article {
        id: Uuid::new_v4(),
        title: request.selected_headline.clone(),
        content: content.to_string(),
        metrics,
        created_at: Utc::now(),
        primary_keyword: request.primary_keyword.clone(),
        selected_keywords: request.selected_keywords.clone(),
    })
}

async fn draft_with_gemini(
    llm: &GeminiClient,
    request: &GenerateArticleRequest,
) -> Result<String, AppError> {
    let prompt = ARTICLE_PROMPT_TEMPLATE
        .replace("{headline}", &request.selected_headline)
        .replace("{primary_keyword}", &request.primary_keyword)
        .replace("{selected_keywords}", &request.selected_keywords.join(", "))
        .replace("{description}", &request.description);

    let config = GenerationConfig::new(0.7, 40, 0.95, 4096);

    let body = llm
        .generate(&prompt, true, &config)
        .await
        .map_err(|e| AppError::Llm(format!("Article generation failed: {e}")))?;

    if body.trim().len() < SHORT_CONTENT_CHARS {
        warn!(
            "Generated article body is unusually short: {} characters",
            body.trim().len()
        );
    }

    Ok(body)
}

/// Drops a leading `# ` heading line.
///
/// The drafting prompt asks for a body without the title, but models add
/// one often enough that the first H1 line is removed before scoring and
/// display. An H1 with no following newline was the entire body, which
/// leaves nothing.
pub fn strip_leading_h1(content: &str) -> &str {
    let content = content.trim();
    match content.strip_prefix("# ") {
        Some(rest) => match rest.find('\n') {
            Some(newline) => rest[newline + 1..].trim(),
            None => "",
        },
        None => content,
    }
}

// ────────────────────────────── tests ──────────────────────────────
