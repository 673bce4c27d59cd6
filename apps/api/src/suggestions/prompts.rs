// All LLM prompt constants for the Suggestions module.

/// Suggestion prompt template. Replace `{description}`, `{primary_keyword}`
/// and `{relevant_keywords}` before sending.
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"CRITICAL: You must respond with ONLY valid JSON, no other text or explanations. Do NOT use markdown code fences.

Generate marketing content suggestions for this campaign:

Content description: {description}
Primary keyword: {primary_keyword}
Relevant keywords: {relevant_keywords}

Create exactly 5 compelling headlines and 10-15 SEO keywords.

Requirements for headlines:
- Each headline must start with the primary keyword followed by a colon
- Cover different angles: a guide, mistakes to avoid, an analysis, expert tips, insider secrets
- Keep the part after the colon under 60 characters
- Write for search intent, not clickbait

Requirements for keywords:
- Mix short-tail and long-tail phrases buyers actually search for
- Build on the relevant keywords where they fit the description
- No duplicates, no keyword stuffing variants of the same phrase

Return this EXACT JSON structure (no extra fields):
{
  "headlines": [
    "headline 1",
    "headline 2",
    "headline 3",
    "headline 4",
    "headline 5"
  ],
  "keywords": [
    "keyword 1",
    "keyword 2"
  ]
}"#;
