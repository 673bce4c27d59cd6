// Image text extraction: turns an uploaded creative into brief text.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod extractor;
pub mod handlers;
pub mod prompts;
