//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper. Request building and answer extraction are pure
//! functions for testability. The persona always travels in
//! `systemInstruction`; it is never concatenated into the user turn.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::LlmTimeouts;
use super::types::{GenerateRequest, GenerationConfig, LlmError, Role, Turn};

const API_KEY_HEADER: &str = "x-goog-api-key";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client for `{base_url}/models/{model}:generateContent`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the reqwest client fails to build.
    pub fn new(api_key: String, base_url: &str, model: &str, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        let endpoint = format!("{}/models/{model}:generateContent", base_url.trim_end_matches('/'));
        Ok(Self { http, api_key, endpoint })
    }

    /// # Errors
    ///
    /// Returns [`LlmError::ApiRequest`] on transport failure,
    /// [`LlmError::ApiResponse`] on a non-success status, and a parse or shape
    /// error when no answer text can be extracted.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError> {
        let body = build_request_body(request);

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body_len = text.len(), "gemini: non-success status");
            return Err(LlmError::ApiResponse { status: status.as_u16(), body: text });
        }

        debug!(body_len = text.len(), "gemini: response received");
        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiRequest<'a> {
    contents: Vec<ApiContent<'a>>,
    system_instruction: ApiSystemInstruction<'a>,
    generation_config: ApiGenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    role: Role,
    parts: [ApiPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ApiSystemInstruction<'a> {
    parts: [ApiPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig<'a> {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "no_stop_sequences")]
    stop_sequences: &'a [String],
}

fn no_stop_sequences(stops: &&[String]) -> bool {
    stops.is_empty()
}

impl<'a> From<&'a GenerationConfig> for ApiGenerationConfig<'a> {
    fn from(cfg: &'a GenerationConfig) -> Self {
        Self {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            top_k: cfg.top_k,
            max_output_tokens: cfg.max_output_tokens,
            stop_sequences: &cfg.stop_sequences,
        }
    }
}

impl<'a> From<&'a Turn> for ApiContent<'a> {
    fn from(turn: &'a Turn) -> Self {
        Self { role: turn.role, parts: [ApiPart { text: &turn.text }] }
    }
}

pub(crate) fn build_request_body(request: &GenerateRequest) -> ApiRequest<'_> {
    let mut contents: Vec<ApiContent<'_>> = request.history.iter().map(ApiContent::from).collect();
    contents.push(ApiContent { role: Role::User, parts: [ApiPart { text: &request.prompt }] });

    ApiRequest {
        contents,
        system_instruction: ApiSystemInstruction { parts: [ApiPart { text: &request.persona }] },
        generation_config: ApiGenerationConfig::from(&request.generation),
    }
}

// =============================================================================
// ANSWER EXTRACTION
// =============================================================================

/// One known place the answer text may live in a response envelope.
pub(crate) struct Extractor {
    pub name: &'static str,
    pub extract: fn(&Value) -> Option<String>,
}

/// Tried in order; the first non-blank result wins.
pub(crate) const EXTRACTORS: &[Extractor] = &[
    Extractor { name: "candidates.content.parts", extract: candidate_parts_text },
    Extractor { name: "text", extract: flat_text },
    Extractor { name: "choices.text", extract: choice_text },
    Extractor { name: "choices.message.content", extract: choice_message_content },
];

fn candidate_parts_text(value: &Value) -> Option<String> {
    let parts = value.pointer("/candidates/0/content/parts")?.as_array()?;
    let texts: Vec<&str> = parts
        .iter()
        .filter(|part| !part.get("thought").and_then(Value::as_bool).unwrap_or(false))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    if texts.is_empty() { None } else { Some(texts.concat()) }
}

fn flat_text(value: &Value) -> Option<String> {
    value.get("text")?.as_str().map(str::to_string)
}

fn choice_text(value: &Value) -> Option<String> {
    value.pointer("/choices/0/text")?.as_str().map(str::to_string)
}

fn choice_message_content(value: &Value) -> Option<String> {
    value.pointer("/choices/0/message/content")?.as_str().map(str::to_string)
}

/// Run the extraction strategies over an already-decoded envelope.
///
/// # Errors
///
/// Returns [`LlmError::UnrecognizedResponseShape`] when every strategy misses.
pub(crate) fn extract_answer(value: &Value) -> Result<String, LlmError> {
    for extractor in EXTRACTORS {
        if let Some(text) = (extractor.extract)(value).filter(|t| !t.trim().is_empty()) {
            debug!(strategy = extractor.name, "gemini: answer extracted");
            return Ok(text);
        }
    }
    let keys: Vec<&str> = value
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    warn!(?keys, "gemini: unrecognized response shape");
    Err(LlmError::UnrecognizedResponseShape)
}

pub(crate) fn parse_response(json: &str) -> Result<String, LlmError> {
    let value: Value = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    extract_answer(&value)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
