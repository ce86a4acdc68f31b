//! Input validator — turns a raw request body into a [`ChatRequest`].

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::llm::types::{Role, Turn};

// =============================================================================
// ERROR
// =============================================================================

/// Request-level failures surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The body was not a JSON object with the expected field types.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No question was supplied, or it was blank after trimming.
    #[error("empty prompt")]
    EmptyPrompt,

    /// The remote model has no API key configured.
    #[error("missing configuration: remote model API key not set")]
    MissingConfiguration,
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "E_MALFORMED_INPUT",
            Self::EmptyPrompt => "E_EMPTY_PROMPT",
            Self::MissingConfiguration => "E_MISSING_CONFIGURATION",
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// One entry of the widget's local chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "isUser", default)]
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    #[must_use]
    pub fn to_turn(&self) -> Turn {
        let role = if self.is_user { Role::User } else { Role::Model };
        Turn { role, text: self.text.trim().to_string() }
    }
}

/// A validated question plus the history the caller chose to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub prompt: String,
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
impl ChatRequest {
    /// Build a request directly, bypassing JSON parsing.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), history: Vec::new() }
    }
}

#[derive(Deserialize)]
struct RawChatRequest {
    #[serde(default, alias = "message")]
    prompt: Option<String>,
    #[serde(default)]
    history: Option<Vec<HistoryEntry>>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse and validate an inbound chat body.
///
/// # Errors
///
/// - [`ChatError::EmptyPrompt`] for an empty body, a missing prompt, or a
///   prompt that is blank after trimming.
/// - [`ChatError::MalformedInput`] when the body is not a JSON object or a
///   field has the wrong type.
pub fn parse_chat_request(body: &str) -> Result<ChatRequest, ChatError> {
    if body.trim().is_empty() {
        return Err(ChatError::EmptyPrompt);
    }

    let raw: RawChatRequest = serde_json::from_str(body).map_err(|e| ChatError::MalformedInput(e.to_string()))?;

    let prompt = raw.prompt.as_deref().map(str::trim).unwrap_or_default();
    if prompt.is_empty() {
        return Err(ChatError::EmptyPrompt);
    }

    let history = raw
        .history
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| !entry.text.trim().is_empty())
        .collect();

    Ok(ChatRequest { prompt: prompt.to_string(), history })
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
