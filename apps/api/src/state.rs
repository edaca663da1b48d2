use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::resume::ResumeText;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `GeminiClient` in production.
    pub llm: Arc<dyn TextGenerator>,
    /// Loaded once before the listener binds; read-only afterwards.
    pub resume: Arc<ResumeText>,
}
