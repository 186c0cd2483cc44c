use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. The model client is behind `Arc<dyn CompletionClient>` so the
/// reconciler can be exercised against a scripted upstream in tests.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
}
