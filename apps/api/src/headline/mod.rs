// Headline refinement: the deterministic keyword-integration path and the
// LLM alternatives path.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod refiner;
