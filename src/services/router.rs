//! Response router — ordered local rules before the remote model.
//!
//! DESIGN
//! ======
//! One declarative rule list, evaluated top-down, first match wins. The
//! priority between overlapping triggers is the order of [`RULES`], not the
//! order of ad hoc conditionals, so it can be read and tested as data.
//!
//! Matching runs on a folded copy of the prompt: lowercase with Portuguese
//! diacritics removed. `Any` and `Both` only match whole words or phrases.

use super::knowledge::{FALLBACK_RULES, RULES};

// =============================================================================
// TYPES
// =============================================================================

/// Which step of the decision chain a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Greeting,
    Identity,
    Menu,
    OutOfScope,
    Knowledge,
}

/// How a rule's triggers are compared against the folded prompt.
#[derive(Debug)]
pub enum Matcher {
    /// The whole prompt (trailing punctuation ignored) equals one token.
    Exact(&'static [&'static str]),
    /// The prompt contains any of the terms.
    Any(&'static [&'static str]),
    /// The prompt contains any subject term and any qualifier term.
    Both(&'static [&'static str], &'static [&'static str]),
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub kind: RuleKind,
    pub matcher: Matcher,
    pub answer: &'static str,
}

/// Routing decision for one prompt.
#[derive(Debug, Clone, Copy)]
pub enum Route {
    Local(&'static Rule),
    Remote,
}

// =============================================================================
// ROUTING
// =============================================================================

/// Decide whether a prompt is answered locally or delegated.
#[must_use]
pub fn route(prompt: &str) -> Route {
    match first_match(RULES, &fold(prompt)) {
        Some(rule) => Route::Local(rule),
        None => Route::Remote,
    }
}

/// Keyword-matched answer used when the remote call fails.
///
/// Checks the local knowledge rules first, then the fallback-only table.
#[must_use]
pub fn fallback_rule(prompt: &str) -> Option<&'static Rule> {
    let folded = fold(prompt);
    RULES
        .iter()
        .filter(|rule| rule.kind == RuleKind::Knowledge)
        .chain(FALLBACK_RULES)
        .find(|rule| rule.matcher.matches(&folded))
}

pub(crate) fn first_match(rules: &'static [Rule], folded: &str) -> Option<&'static Rule> {
    rules.iter().find(|rule| rule.matcher.matches(folded))
}

impl Matcher {
    #[must_use]
    pub fn matches(&self, folded: &str) -> bool {
        match self {
            Self::Exact(tokens) => {
                let bare = folded.trim_end_matches(['!', '?', '.', ',', ' ']).trim();
                tokens.iter().any(|t| *t == bare)
            }
            Self::Any(terms) => terms.iter().any(|t| contains_phrase(folded, t)),
            Self::Both(subjects, qualifiers) => {
                subjects.iter().any(|t| contains_phrase(folded, t))
                    && qualifiers.iter().any(|t| contains_phrase(folded, t))
            }
        }
    }
}

/// True when `phrase` occurs in `haystack` delimited by non-alphanumerics.
pub(crate) fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    haystack.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before_ok = haystack[..start].chars().next_back().is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

// =============================================================================
// FOLDING
// =============================================================================

/// Lowercase, strip Portuguese diacritics, collapse whitespace.
#[must_use]
pub fn fold(text: &str) -> String {
    let mapped: String = text.chars().flat_map(char::to_lowercase).map(strip_diacritic).collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
