//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable settings and the optional remote model client; every
//! request is answered independently.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::settings::ChatSettings;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Remote model client. `None` when `GEMINI_API_KEY` is not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub settings: Arc<ChatSettings>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, settings: ChatSettings) -> Self {
        Self { llm, settings: Arc::new(settings) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with no remote model configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, ChatSettings::default())
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm), ChatSettings::default())
    }
}
