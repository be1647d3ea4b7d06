use std::sync::Arc;

use crate::generation::generation_log::GenerationLog;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generator behind the caption path. `LlmClient` in production, a stub in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub generation_log: GenerationLog,
}
