//! Chat pipeline — router, remote model, fallback, normalizer.
//!
//! DESIGN
//! ======
//! `answer` never fails. A local rule answers immediately; otherwise one
//! remote call is made under a bounded wait. Any remote failure is logged
//! with its failure kind and absorbed: the keyword fallback table answers,
//! and when nothing matches an apology template is picked at random. Every
//! answer passes through the normalizer before it leaves.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{info, warn};

use super::input::ChatRequest;
use super::knowledge::APOLOGY_REPLIES;
use super::normalize::{AnswerBounds, normalize};
use super::persona::{PERSONA, contextualize};
use super::router::{Route, fallback_rule, route};
use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::{GenerateRequest, LlmError, Role, Turn};
use crate::settings::ChatSettings;

// =============================================================================
// TYPES
// =============================================================================

/// Where an answer came from. Logged and tested, never sent to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Local(&'static str),
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    pub answer: String,
    pub source: AnswerSource,
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Answer one validated request.
pub async fn answer(llm: &dyn LlmChat, settings: &ChatSettings, request: &ChatRequest) -> ChatOutcome {
    let rule = match route(&request.prompt) {
        Route::Local(rule) => rule,
        Route::Remote => return answer_remote(llm, settings, request).await,
    };

    info!(route = rule.name, kind = ?rule.kind, "chat: local answer");
    ChatOutcome { answer: normalize(rule.answer, settings.bounds), source: AnswerSource::Local(rule.name) }
}

async fn answer_remote(llm: &dyn LlmChat, settings: &ChatSettings, request: &ChatRequest) -> ChatOutcome {
    let generate = build_generate_request(settings, request);
    let started = Instant::now();

    match generate_with_timeout(llm, &generate, settings.remote_timeout).await {
        Ok(text) => {
            info!(elapsed_ms = elapsed_ms(started), chars = text.chars().count(), "chat: remote answer");
            ChatOutcome { answer: normalize(&text, settings.bounds), source: AnswerSource::Remote }
        }
        Err(e) => {
            warn!(
                failure_kind = e.failure_kind().as_str(),
                code = e.error_code(),
                retryable = e.retryable(),
                elapsed_ms = elapsed_ms(started),
                error = %e,
                "chat: remote call failed, answering locally"
            );
            fallback_answer(&request.prompt, settings.bounds)
        }
    }
}

/// Run one remote call, giving up after `limit`.
///
/// Dropping the generate future on expiry cancels the in-flight request.
///
/// # Errors
///
/// Returns the client's [`LlmError`], or [`LlmError::Timeout`] on expiry.
pub async fn generate_with_timeout(
    llm: &dyn LlmChat,
    request: &GenerateRequest,
    limit: Duration,
) -> Result<String, LlmError> {
    match tokio::time::timeout(limit, llm.generate(request)).await {
        Ok(result) => result,
        Err(_) => Err(LlmError::Timeout { secs: limit.as_secs() }),
    }
}

/// Keyword fallback, or a random apology when no keyword matches.
#[must_use]
pub fn fallback_answer(prompt: &str, bounds: AnswerBounds) -> ChatOutcome {
    let text = match fallback_rule(prompt) {
        Some(rule) => {
            info!(route = rule.name, "chat: fallback rule");
            rule.answer
        }
        None => {
            let pick = rand::rng().random_range(0..APOLOGY_REPLIES.len());
            info!(template = pick, "chat: apology template");
            APOLOGY_REPLIES[pick]
        }
    };
    ChatOutcome { answer: normalize(text, bounds), source: AnswerSource::Fallback }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// =============================================================================
// REQUEST BUILDING
// =============================================================================

pub(crate) fn build_generate_request(settings: &ChatSettings, request: &ChatRequest) -> GenerateRequest {
    let skip = request.history.len().saturating_sub(settings.history_window);
    let mut history: Vec<Turn> = request.history[skip..].iter().map(|entry| entry.to_turn()).collect();

    // The widget may already have appended the current question.
    if history.last().is_some_and(|t| t.role == Role::User && t.text == request.prompt) {
        history.pop();
    }

    GenerateRequest {
        persona: PERSONA.to_string(),
        prompt: contextualize(&request.prompt, &history),
        history,
        generation: settings.generation.clone(),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
