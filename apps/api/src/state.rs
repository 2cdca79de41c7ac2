use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built from `Config` at startup; nothing in here is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: `LlmClient` (Gemini).
    pub llm: Arc<dyn TextGenerator>,
}
