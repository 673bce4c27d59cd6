use std::sync::Arc;

use crate::llm_client::GeminiClient;
use crate::store::ArticleStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini client. `None` means no API key is configured and every
    /// generation endpoint serves its deterministic mock data instead.
    pub llm: Option<GeminiClient>,
    /// Pluggable article history store. Default: InMemoryArticleStore.
    pub store: Arc<dyn ArticleStore>,
}
