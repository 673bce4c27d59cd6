//! Image Text Extraction — reads the marketing copy out of an uploaded
//! creative so it can seed a content brief.
//!
//! Failures here are never fatal to the authoring flow: any Gemini error
//! falls back to the same mock text used when no API key is configured.

use tracing::{info, warn};

use crate::llm_client::{GeminiClient, GenerationConfig};
use crate::vision::prompts::IMAGE_TEXT_PROMPT;

/// Mock extraction used without an API key and after failures.
const MOCK_EXTRACTED_TEXT: &str = "Professional marketing campaign for premium automotive services featuring luxury vehicle maintenance and repair solutions. High-quality service center specializing in European car brands with certified technicians and state-of-the-art diagnostic equipment.";

/// Extracts marketing-relevant text from a base64-encoded image.
pub async fn extract_image_text(
    llm: Option<&GeminiClient>,
    base64_image: &str,
    mime_type: &str,
) -> String {
    let llm = match llm {
        Some(llm) => llm,
        None => {
            info!("No Gemini API key configured, using mock image text");
            return MOCK_EXTRACTED_TEXT.to_string();
        }
    };

    let config = GenerationConfig::new(0.3, 32, 0.95, 1024);

    match llm
        .generate_with_image(IMAGE_TEXT_PROMPT, mime_type, base64_image, &config)
        .await
    {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Image text extraction failed ({e}), using mock text");
            MOCK_EXTRACTED_TEXT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_client_serves_mock_text() {
        let text = extract_image_text(None, "QUJD", "image/png").await;
        assert_eq!(text, MOCK_EXTRACTED_TEXT);
    }
}
