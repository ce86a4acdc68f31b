//! Output normalizer — plain prose, bounded length, terminal punctuation.
//!
//! Applied to every answer regardless of source. `normalize` is idempotent:
//! feeding it its own output returns the same string.

use tracing::debug;

use super::knowledge::DEGENERATE_ANSWER_REPLY;

pub const DEFAULT_MIN_CHARS: usize = 50;
pub const DEFAULT_MAX_CHARS: usize = 1500;

const CONTINUATION: &str = "...";
const TERMINALS: [char; 3] = ['.', '!', '?'];

// =============================================================================
// TYPES
// =============================================================================

/// Length bounds in characters (not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerBounds {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for AnswerBounds {
    fn default() -> Self {
        Self { min_chars: DEFAULT_MIN_CHARS, max_chars: DEFAULT_MAX_CHARS }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("degenerate answer: {chars} chars after cleanup (min {min})")]
    Degenerate { chars: usize, min: usize },
}

// =============================================================================
// NORMALIZE
// =============================================================================

/// Clean and bound an answer, substituting a template for degenerate text.
#[must_use]
pub fn normalize(raw: &str, bounds: AnswerBounds) -> String {
    match try_normalize(raw, bounds) {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "normalize: substituting template");
            try_normalize(DEGENERATE_ANSWER_REPLY, bounds).unwrap_or_else(|_| DEGENERATE_ANSWER_REPLY.to_string())
        }
    }
}

/// Clean and bound an answer.
///
/// # Errors
///
/// Returns [`AnswerError::Degenerate`] when fewer than `min_chars` remain
/// after markup cleanup.
pub fn try_normalize(raw: &str, bounds: AnswerBounds) -> Result<String, AnswerError> {
    let cleaned = clean_markup(raw);
    let chars = cleaned.chars().count();
    if chars < bounds.min_chars {
        return Err(AnswerError::Degenerate { chars, min: bounds.min_chars });
    }
    let terminated = ensure_terminal(cleaned);
    Ok(truncate(terminated, bounds))
}

/// Strip markdown artifacts and unescape literal `\n` sequences.
#[must_use]
pub fn clean_markup(raw: &str) -> String {
    let unescaped = raw.replace("\\n", "\n");

    let without_fences: Vec<&str> = unescaped
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect();
    let joined = without_fences.join("\n");

    let stripped: String = joined.chars().filter(|c| !matches!(c, '*' | '`')).collect();
    let stripped = stripped.replace("__", "").replace("\\n", "\n");

    let lines: Vec<&str> = stripped
        .lines()
        .map(|line| {
            let lead = line.trim_start();
            if lead.starts_with('#') { lead.trim_start_matches(|c: char| c == '#' || c.is_whitespace()) } else { line }
        })
        .collect();

    lines.join("\n").trim().to_string()
}

fn ensure_terminal(mut text: String) -> String {
    if !text.ends_with(TERMINALS) {
        text.push('.');
    }
    text
}

/// Cut at the last sentence end in the final quarter before the limit,
/// otherwise hard-cut and append a continuation marker. A sentence end that
/// would leave fewer than `min_chars` is not a valid cut point.
fn truncate(text: String, bounds: AnswerBounds) -> String {
    let max_chars = bounds.max_chars;
    if text.chars().count() <= max_chars {
        return text;
    }

    let window = max_chars / 4;
    let prefix: Vec<(usize, char)> = text.char_indices().take(max_chars).collect();
    let sentence_end = prefix
        .iter()
        .enumerate()
        .rev()
        .take(window)
        .find(|(i, (_, c))| TERMINALS.contains(c) && i + 1 >= bounds.min_chars)
        .map(|(_, (byte, c))| byte + c.len_utf8());

    if let Some(end) = sentence_end {
        return text[..end].to_string();
    }

    let keep = max_chars.saturating_sub(CONTINUATION.len());
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(byte, _)| byte);
    let mut out = text[..cut].trim_end().to_string();
    out.push_str(CONTINUATION);
    out
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
