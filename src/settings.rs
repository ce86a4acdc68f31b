//! Chat pipeline settings parsed from environment variables.
//!
//! Unparseable values fall back to their defaults; the service never refuses
//! to start over a tuning knob.

use std::time::Duration;

use crate::llm::config::parse_or;
use crate::llm::types::GenerationConfig;
use crate::services::normalize::{AnswerBounds, DEFAULT_MAX_CHARS, DEFAULT_MIN_CHARS};

pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_HISTORY_WINDOW: usize = 5;
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    /// Bounded wait for one remote call.
    pub remote_timeout: Duration,
    pub generation: GenerationConfig,
    pub bounds: AnswerBounds,
    /// Number of trailing history entries forwarded to the model.
    pub history_window: usize,
    pub port: u16,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            remote_timeout: Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
            generation: GenerationConfig::default(),
            bounds: AnswerBounds::default(),
            history_window: DEFAULT_HISTORY_WINDOW,
            port: DEFAULT_PORT,
        }
    }
}

impl ChatSettings {
    /// Read settings from the process environment.
    ///
    /// - `REMOTE_TIMEOUT_SECS`: default 15
    /// - `LLM_TEMPERATURE`, `LLM_TOP_P`, `LLM_TOP_K`, `LLM_MAX_OUTPUT_TOKENS`
    /// - `ANSWER_MIN_CHARS` / `ANSWER_MAX_CHARS`: default 50 / 1500
    /// - `HISTORY_WINDOW`: default 5
    /// - `PORT`: default 3001
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ChatSettings::from_env`], reading values through `var`.
    #[must_use]
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GenerationConfig::default();
        let generation = GenerationConfig {
            temperature: parse_or(var("LLM_TEMPERATURE"), defaults.temperature),
            top_p: parse_or(var("LLM_TOP_P"), defaults.top_p),
            top_k: parse_or(var("LLM_TOP_K"), defaults.top_k),
            max_output_tokens: parse_or(var("LLM_MAX_OUTPUT_TOKENS"), defaults.max_output_tokens),
            stop_sequences: defaults.stop_sequences,
        };

        let min_chars = parse_or(var("ANSWER_MIN_CHARS"), DEFAULT_MIN_CHARS);
        let max_chars = parse_or(var("ANSWER_MAX_CHARS"), DEFAULT_MAX_CHARS);
        // Truncation must leave room for the continuation marker above the minimum.
        let bounds = if max_chars > min_chars.max(3) {
            AnswerBounds { min_chars, max_chars }
        } else {
            tracing::warn!(min_chars, max_chars, "answer bounds inverted, using defaults");
            AnswerBounds::default()
        };

        let remote_secs = parse_or(var("REMOTE_TIMEOUT_SECS"), DEFAULT_REMOTE_TIMEOUT_SECS).max(1);

        Self {
            remote_timeout: Duration::from_secs(remote_secs),
            generation,
            bounds,
            history_window: parse_or(var("HISTORY_WINDOW"), DEFAULT_HISTORY_WINDOW),
            port: parse_or(var("PORT"), DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
