//! Gemini Client — the single point of entry for all Gemini API calls in
//! ContentForge.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All generative interactions MUST go through this module.
//!
//! Model: gemini-2.0-flash-exp (hardcoded — do not make configurable to prevent drift)

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generative calls in ContentForge.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.0-flash-exp";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Content was blocked by safety filters")]
    Safety,

    #[error("Content was blocked due to recitation concerns")]
    Recitation,

    #[error("Generation stopped for an unspecified reason")]
    Blocked,

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

/// Web-search grounding toggle. Serializes to `{"google_search": {}}`,
/// which is the wire name the API expects.
#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

/// Sampling knobs forwarded as `generationConfig`. Unset fields fall back
/// to the API defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    pub fn new(temperature: f32, top_k: u32, top_p: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature: Some(temperature),
            top_k: Some(top_k),
            top_p: Some(top_p),
            max_output_tokens: Some(max_output_tokens),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GeminiResponse {
    /// Extracts the text of the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single Gemini client used by all services in ContentForge.
/// Wraps the `generateContent` API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Generates text from a plain prompt. `with_search` attaches the
    /// Google Search grounding tool.
    pub async fn generate(
        &self,
        prompt: &str,
        with_search: bool,
        config: &GenerationConfig,
    ) -> Result<String, LlmError> {
        let parts = vec![Part::Text { text: prompt }];
        let response = self.call(parts, with_search, config).await?;
        extract_text(&response)
    }

    /// Generates text from a prompt plus one inline base64-encoded image.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        base64_data: &str,
        config: &GenerationConfig,
    ) -> Result<String, LlmError> {
        let parts = vec![
            Part::Text { text: prompt },
            Part::Image {
                inline_data: InlineData {
                    mime_type,
                    data: base64_data,
                },
            },
        ];
        let response = self.call(parts, false, config).await?;
        extract_text(&response)
    }

    /// Convenience method that generates text and deserializes it as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        with_search: bool,
        config: &GenerationConfig,
    ) -> Result<T, LlmError> {
        let text = self.generate(prompt, with_search, config).await?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }

    /// Makes a raw `generateContent` call.
    /// Retries on transport errors, 429 and 5xx with exponential backoff;
    /// safety and recitation blocks fail immediately.
    async fn call(
        &self,
        parts: Vec<Part<'_>>,
        with_search: bool,
        config: &GenerationConfig,
    ) -> Result<GeminiResponse, LlmError> {
        let request_body = GeminiRequest {
            contents: vec![Content { parts }],
            tools: with_search.then(|| {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            }),
            generation_config: config,
        };

        let url = format!(
            "{GEMINI_API_BASE}/{MODEL}:generateContent?key={}",
            self.api_key
        );

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Gemini call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let gemini_response: GeminiResponse = response.json().await?;

            check_finish_reason(&gemini_response)?;

            if let Some(usage) = &gemini_response.usage_metadata {
                debug!(
                    "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                    usage.prompt_token_count.unwrap_or(0),
                    usage.candidates_token_count.unwrap_or(0)
                );
            }

            return Ok(gemini_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Maps a blocked candidate to its typed error. Normal finish reasons
/// (STOP, MAX_TOKENS) pass through.
fn check_finish_reason(response: &GeminiResponse) -> Result<(), LlmError> {
    let reason = response
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref());
    match reason {
        Some("SAFETY") => Err(LlmError::Safety),
        Some("RECITATION") => Err(LlmError::Recitation),
        Some("OTHER") => Err(LlmError::Blocked),
        _ => Ok(()),
    }
}

/// Pulls non-empty text out of a response.
fn extract_text(response: &GeminiResponse) -> Result<String, LlmError> {
    let text = response.text().ok_or(LlmError::EmptyContent)?;
    if text.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(text.to_string())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn request_serializes_to_wire_format() {
        let config = GenerationConfig::new(0.7, 40, 0.95, 1024);
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: "hello" }],
            }],
            tools: Some(vec![Tool {
                google_search: GoogleSearch {},
            }]),
            generation_config: &config,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["tools"][0]["google_search"], serde_json::json!({}));
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn partial_config_omits_unset_fields() {
        let config = GenerationConfig {
            temperature: Some(0.4),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        let fields = json.as_object().unwrap();
        assert!(fields.contains_key("temperature"));
        assert!(!fields.contains_key("topK"));
        assert!(!fields.contains_key("topP"));
        assert!(!fields.contains_key("maxOutputTokens"));
    }

    #[test]
    fn image_parts_serialize_as_inline_data() {
        let part = Part::Image {
            inline_data: InlineData {
                mime_type: "image/png",
                data: "QUJD",
            },
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["inlineData"]["mimeType"], "image/png");
        assert_eq!(json["inlineData"]["data"], "QUJD");
    }

    #[test]
    fn parses_candidate_text_and_usage() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "generated"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20}
        }"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), Some("generated"));
        assert!(check_finish_reason(&response).is_ok());
        assert_eq!(
            response.usage_metadata.unwrap().candidates_token_count,
            Some(20)
        );
    }

    #[test]
    fn safety_block_is_a_typed_error() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            check_finish_reason(&response),
            Err(LlmError::Safety)
        ));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
        assert!(matches!(
            extract_text(&response),
            Err(LlmError::EmptyContent)
        ));
    }
}
