// All LLM prompt constants for the Vision module.

/// Image analysis prompt. Sent together with the inline image data; no
/// placeholders to replace.
pub const IMAGE_TEXT_PROMPT: &str = r#"Analyze this image and extract all visible text content. Focus on:
1. Any headlines, titles, or main text
2. Product descriptions or marketing copy
3. Brand names or company information
4. Key messages or value propositions

Provide a comprehensive description of the creative content shown in the image that would be suitable for generating SEO-optimized articles. Focus on the business vertical, products/services, and key messaging.

Return only the extracted and interpreted text content without any additional formatting or explanations."#;
