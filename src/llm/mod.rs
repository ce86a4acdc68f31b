//! LLM — remote generative-language client.
//!
//! DESIGN
//! ======
//! Configured from environment variables. The pipeline depends only on the
//! [`LlmChat`] trait so tests can inject fakes; `LlmClient` is the production
//! implementation backed by Gemini `generateContent`.

pub mod config;
pub mod gemini;
pub mod types;

use config::{LlmConfig, mask_api_key};
pub use types::LlmChat;
use types::{GenerateRequest, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client for the Gemini API.
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
    masked_key: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `GEMINI_API_KEY`: API key (required)
    /// - `GEMINI_MODEL`: model name (e.g. "gemini-2.5-flash")
    /// - `GEMINI_BASE_URL`: custom base URL for compatible gateways
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let masked_key = mask_api_key(&config.api_key);
        let inner = gemini::GeminiClient::new(config.api_key, &config.base_url, &config.model, config.timeouts)?;
        Ok(Self { inner, model: config.model, masked_key })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Return the API key masked for logging.
    #[must_use]
    pub fn masked_key(&self) -> &str {
        &self.masked_key
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError> {
        self.inner.generate(request).await
    }
}
