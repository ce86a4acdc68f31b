//! LLM types — request model, errors, and the client trait.
//!
//! The pipeline only ever talks to [`LlmChat`]; the Gemini wire format stays
//! inside `gemini.rs`.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the model provider failed (connect, reset, body read).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The model provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The response was JSON but no extraction strategy found answer text.
    #[error("unrecognized response shape")]
    UnrecognizedResponseShape,

    /// No response arrived within the bounded wait.
    #[error("remote call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Coarse classification of a remote failure, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BadRequest,
    Auth,
    RateLimited,
    Server,
    Timeout,
    Network,
    Shape,
    Other,
}

impl FailureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Auth => "auth",
            Self::RateLimited => "rate_limited",
            Self::Server => "server_error",
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::Shape => "response_shape",
            Self::Other => "other",
        }
    }

    /// Map an HTTP status from the provider onto the taxonomy.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 | 403 => Self::Auth,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

impl LlmError {
    #[must_use]
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::ApiResponse { status, .. } => FailureKind::from_status(*status),
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::ApiRequest(_) => FailureKind::Network,
            Self::ApiParse(_) | Self::UnrecognizedResponseShape => FailureKind::Shape,
            Self::ConfigParse(_) | Self::MissingApiKey { .. } | Self::HttpClientBuild(_) => FailureKind::Other,
        }
    }
}

impl ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::UnrecognizedResponseShape => "E_UNRECOGNIZED_RESPONSE_SHAPE",
            Self::Timeout { .. } => "E_REMOTE_TIMEOUT",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(
            self,
            Self::ApiRequest(_) | Self::Timeout { .. } | Self::ApiResponse { status: 429 | 500..=599, .. }
        )
    }
}

// =============================================================================
// REQUEST MODEL
// =============================================================================

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One prior turn passed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// Sampling parameters sent with every remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub stop_sequences: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { temperature: 0.7, top_p: 0.8, top_k: 40, max_output_tokens: 500, stop_sequences: Vec::new() }
    }
}

/// A single outbound generation call. Built fresh per request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub persona: String,
    pub prompt: String,
    pub history: Vec<Turn>,
    pub generation: GenerationConfig,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send one generation request and return the raw answer text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider answers with
    /// a non-success status, or no answer text can be extracted.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
