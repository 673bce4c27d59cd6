// Suggestion engine: headline and keyword ideation from a content brief.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
