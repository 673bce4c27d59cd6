// All LLM prompt constants for the Articles module.

/// Article drafting prompt template. Replace `{headline}`,
/// `{primary_keyword}`, `{selected_keywords}` and `{description}` before
/// sending. Sent with the web-search grounding tool enabled.
pub const ARTICLE_PROMPT_TEMPLATE: &str = r#"Write a professional, SEO-optimized article with these specifications:

ARTICLE REQUIREMENTS:
- Title: "{headline}"
- Primary keyword: "{primary_keyword}"
- Target keywords to include: {selected_keywords}
- Word count: Exactly 800 words (750-850 acceptable)
- Content description: {description}

RESEARCH REQUIREMENTS:
- Search the web for current statistics, trends, and insights related to "{primary_keyword}"
- Include recent data and examples from authoritative sources
- Reference current industry best practices and emerging trends

SEO SPECIFICATIONS:
- Include 3-4 H2 sections (## format)
- Keyword density: 0.5-0.8% maximum
- Bold the primary keyword and 4-5 other important keywords using **text**
- Natural, conversational tone
- Grade 8 reading level
- Active voice
- Include current statistics and insights
- NEVER mention "SEO", "optimization", or "keywords" in the content

STRUCTURE:
1. Compelling introduction with primary keyword
2. 3-4 main sections with H2 headings
3. Strong conclusion

Write the article in markdown format without including the title as H1 since it will be displayed separately. Start directly with the introduction paragraph. Focus on providing genuine value and insights while naturally incorporating the target keywords.

Use web search results to ensure the content is current, accurate, and includes the latest industry insights and statistics."#;
