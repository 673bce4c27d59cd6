//! Suggestion Generation — candidate headlines and SEO keywords for a
//! content brief.
//!
//! The Gemini path asks for strict JSON with web-search grounding enabled.
//! Any failure (no API key, HTTP error, unparseable or structurally empty
//! JSON) falls back to deterministic mock suggestions so the authoring
//! flow never stalls.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::{GeminiClient, GenerationConfig};
use crate::suggestions::prompts::SUGGESTIONS_PROMPT_TEMPLATE;

/// Cap on returned keyword suggestions.
const MAX_KEYWORD_SUGGESTIONS: usize = 15;
/// How many of the caller's own keywords seed the mock suggestion list.
const MOCK_RELEVANT_KEYWORDS: usize = 8;

/// Headline and keyword ideas for one brief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub headlines: Vec<String>,
    pub keywords: Vec<String>,
}

/// Returns suggestions for the brief, preferring Gemini and falling back
/// to mock data on any failure.
pub async fn generate_suggestions(
    llm: Option<&GeminiClient>,
    description: &str,
    primary_keyword: &str,
    relevant_keywords: &[String],
) -> SuggestionSet {
    let llm = match llm {
        Some(llm) => llm,
        None => {
            info!("No Gemini API key configured, using mock suggestions");
            return mock_suggestions(primary_keyword, relevant_keywords);
        }
    };

    let prompt = SUGGESTIONS_PROMPT_TEMPLATE
        .replace("{description}", description)
        .replace("{primary_keyword}", primary_keyword)
        .replace("{relevant_keywords}", &relevant_keywords.join(", "));

    let config = GenerationConfig::new(0.7, 40, 0.95, 1024);

    match llm.generate_json::<SuggestionSet>(&prompt, true, &config).await {
        Ok(set) if !set.headlines.is_empty() && !set.keywords.is_empty() => set,
        Ok(_) => {
            warn!("Suggestion response was missing headlines or keywords, using mock data");
            mock_suggestions(primary_keyword, relevant_keywords)
        }
        Err(e) => {
            warn!("Suggestion call failed ({e}), using mock data");
            mock_suggestions(primary_keyword, relevant_keywords)
        }
    }
}

/// Deterministic suggestions used without an API key and after failures.
/// Headlines follow the "{keyword}: angle" shape the prompt asks for;
/// keywords blend the caller's own terms with derived long-tail phrases.
pub fn mock_suggestions(primary_keyword: &str, relevant_keywords: &[String]) -> SuggestionSet {
    let headlines = vec![
        format!("{primary_keyword}: The Ultimate Guide to Getting the Best Deal"),
        format!("{primary_keyword}: Avoid These 5 Costly Mistakes Before You Buy"),
        format!("{primary_keyword}: Is It Right for Your Budget? Complete Analysis"),
        format!("{primary_keyword}: Expert Tips for Finding Hidden Gems"),
        format!("{primary_keyword}: Secrets to Negotiating the Perfect Price"),
    ];

    let mut keywords: Vec<String> = relevant_keywords
        .iter()
        .take(MOCK_RELEVANT_KEYWORDS)
        .cloned()
        .collect();
    for suffix in [
        "tips",
        "best practices",
        "strategy",
        "guide",
        "techniques",
        "trends",
        "benefits",
    ] {
        keywords.push(format!("{primary_keyword} {suffix}"));
    }
    keywords.truncate(MAX_KEYWORD_SUGGESTIONS);

    SuggestionSet {
        headlines,
        keywords,
    }
}

/// Re-keys headlines onto a replacement keyword by swapping the text before
/// the first colon. Colon-less headlines are prefixed whole.
pub fn rekey_headlines(headlines: &[String], new_keyword: &str) -> Vec<String> {
    headlines
        .iter()
        .map(|headline| match headline.split_once(':') {
            Some((_, rest)) => format!("{new_keyword}: {}", rest.trim()),
            None => format!("{new_keyword}: {headline}"),
        })
        .collect()
}

// ────────────────────────────── tests ──────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn mock_headlines_start_with_the_primary_keyword() {
        let set = mock_suggestions("used cars", &[]);
        assert_eq!(set.headlines.len(), 5);
        for headline in &set.headlines {
            assert!(headline.starts_with("used cars: "), "{headline}");
        }
    }

    #[test]
    fn mock_keywords_blend_given_and_derived_terms() {
        let set = mock_suggestions("seo", &keywords(&["rankings", "traffic"]));
        assert_eq!(set.keywords[..2], ["rankings", "traffic"]);
        assert!(set.keywords.contains(&"seo tips".to_string()));
        assert!(set.keywords.contains(&"seo benefits".to_string()));
        assert_eq!(set.keywords.len(), 9);
    }

    #[test]
    fn mock_keywords_are_capped() {
        let many: Vec<String> = (0..20).map(|i| format!("kw{i}")).collect();
        let set = mock_suggestions("seo", &many);
        assert_eq!(set.keywords.len(), MAX_KEYWORD_SUGGESTIONS);
        // Only the first eight caller keywords survive, then derived terms.
        assert_eq!(set.keywords[7], "kw7");
        assert_eq!(set.keywords[8], "seo tips");
    }

    #[test]
    fn rekey_swaps_text_before_the_first_colon() {
        let headlines = keywords(&[
            "old: The Ultimate Guide",
            "old: Part One: Basics",
            "No Colon Here",
        ]);
        let rekeyed = rekey_headlines(&headlines, "new");
        assert_eq!(rekeyed[0], "new: The Ultimate Guide");
        assert_eq!(rekeyed[1], "new: Part One: Basics");
        assert_eq!(rekeyed[2], "new: No Colon Here");
    }

    #[tokio::test]
    async fn missing_client_serves_mock_suggestions() {
        let set = generate_suggestions(None, "a campaign", "seo", &keywords(&["traffic"])).await;
        assert_eq!(set.headlines.len(), 5);
        assert!(!set.keywords.is_empty());
    }
}
