//! Headline Refinement — two independent paths over the same resource.
//!
//! The deterministic path runs entirely locally: whitespace normalization,
//! keyword integration through the SEO core, then case instructions. The
//! alternatives path asks Gemini for constrained rewrites and cleans up
//! the returned list. Only the alternatives path can fail; the
//! deterministic path is total.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::headline::prompts::ALTERNATIVES_PROMPT_TEMPLATE;
use crate::llm_client::{GeminiClient, GenerationConfig};
use crate::seo::headline::{integrate_keyword, to_title_case};

/// Default max headline length for the deterministic path.
pub const DEFAULT_REFINE_MAX_LENGTH: usize = 80;
/// Defaults for the alternatives path.
pub const DEFAULT_ALTERNATIVES_MAX_LENGTH: usize = 60;
pub const DEFAULT_ALTERNATIVES_COUNT: usize = 5;
const MAX_ALTERNATIVES: usize = 10;
/// A word-boundary cut in `trim_to_length` is only taken past this column.
const MIN_TRIM_BOUNDARY: usize = 40;

/// Outcome of the deterministic refinement path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedHeadline {
    pub refined_headline: String,
    pub original_headline: String,
    pub keyword_integrated: bool,
    pub success: bool,
    pub actual_length: usize,
    pub extended_length: bool,
}

/// Deterministic refinement: collapse whitespace, force the primary
/// keyword in via the integrator, then apply case instructions.
///
/// Case instructions are substring-matched in order (title case, then
/// uppercase, then lowercase), so combined instructions apply in that
/// sequence. `extended_length` reports an overrun instead of truncating;
/// cutting a headline mid-word loses the keyword guarantee.
pub fn refine_headline(
    current_headline: &str,
    instructions: &str,
    primary_keyword: Option<&str>,
    max_length: usize,
) -> RefinedHeadline {
    let mut refined = collapse_whitespace(current_headline);

    let keyword = primary_keyword.map(str::trim).filter(|k| !k.is_empty());
    if let Some(keyword) = keyword {
        refined = integrate_keyword(&refined, keyword);
    }

    let instructions_lower = instructions.to_lowercase();
    if instructions_lower.contains("title case") {
        refined = to_title_case(&refined);
    }
    if instructions_lower.contains("uppercase") {
        refined = refined.to_uppercase();
    }
    if instructions_lower.contains("lowercase") {
        refined = refined.to_lowercase();
    }

    let keyword_integrated = match keyword {
        Some(keyword) => refined.to_lowercase().contains(&keyword.to_lowercase()),
        None => true,
    };

    let actual_length = refined.chars().count();
    RefinedHeadline {
        refined_headline: refined,
        original_headline: current_headline.to_string(),
        keyword_integrated,
        success: true,
        actual_length,
        extended_length: actual_length > max_length,
    }
}

/// Collapses whitespace runs to single spaces and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Outcome of the alternatives path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineAlternatives {
    pub refined_headline: String,
    pub alternatives: Vec<String>,
}

/// LLM-backed refinement: asks for `count` constrained rewrites of the
/// headline, one per line, and cleans up the returned list. Serves a mock
/// rewrite when no client is configured; an empty cleaned list falls back
/// to an instruction-prefixed headline rather than failing.
pub async fn generate_alternatives(
    llm: Option<&GeminiClient>,
    current_headline: &str,
    instructions: &str,
    max_length: usize,
    count: usize,
) -> Result<HeadlineAlternatives, AppError> {
    let count = count.clamp(1, MAX_ALTERNATIVES);

    let llm = match llm {
        Some(llm) => llm,
        None => {
            info!("No Gemini API key configured, using mock headline refinement");
            let refined = mock_refinement(current_headline, instructions);
            return Ok(HeadlineAlternatives {
                refined_headline: refined.clone(),
                alternatives: vec![refined],
            });
        }
    };

    let prompt = ALTERNATIVES_PROMPT_TEMPLATE
        .replace("{current_headline}", current_headline)
        .replace("{instructions}", instructions)
        .replace("{count}", &count.to_string())
        .replace("{max_length}", &max_length.to_string());

    let config = GenerationConfig {
        temperature: Some(0.4),
        ..GenerationConfig::default()
    };

    let text = llm
        .generate(&prompt, false, &config)
        .await
        .map_err(|e| AppError::Llm(format!("Headline refinement failed: {e}")))?;

    let alternatives = parse_alternatives(&text, count, max_length);
    if alternatives.is_empty() {
        let fallback = trim_to_length(&format!("{instructions}: {current_headline}"), max_length);
        return Ok(HeadlineAlternatives {
            refined_headline: fallback.clone(),
            alternatives: vec![fallback],
        });
    }

    Ok(HeadlineAlternatives {
        refined_headline: alternatives[0].clone(),
        alternatives,
    })
}

/// Mock refinement: re-keys the trailing segment of the headline onto the
/// instruction text.
fn mock_refinement(current_headline: &str, instructions: &str) -> String {
    let tail = current_headline
        .rsplit(':')
        .next()
        .unwrap_or(current_headline)
        .trim();
    format!("{instructions}: {tail}")
}

/// Cleans the model's line-per-option output: strips list markers, drops
/// empty lines, dedupes preserving order, truncates to `count`, then
/// length-trims each survivor.
fn parse_alternatives(text: &str, count: usize, max_length: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .take(count)
        .map(|line| trim_to_length(line, max_length))
        .collect()
}

/// Strips a leading bullet (`-`, `*`) or numbered (`1.`, `2)`) list marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(['-', '*']) {
        return rest.trim_start();
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(['.', ')']) {
            return rest.trim_start();
        }
    }
    line
}

/// Trims text to `max_length` characters, preferring to cut at the last
/// space past the boundary column so words stay whole.
pub fn trim_to_length(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length.saturating_sub(1)).collect();
    let keep = match cut.char_indices().rev().find(|(_, c)| *c == ' ') {
        Some((at, _)) if cut[..at].chars().count() > MIN_TRIM_BOUNDARY => &cut[..at],
        _ => cut.as_str(),
    };
    keep.trim().to_string()
}

// ────────────────────────────── tests ──────────────────────────────
