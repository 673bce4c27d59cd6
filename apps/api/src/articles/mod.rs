// Article generation engine: prompt assembly, Gemini drafting with mock
// fallback, H1 cleanup, metrics scoring, history persistence.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod mock;
pub mod prompts;
