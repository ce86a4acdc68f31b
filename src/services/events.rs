//! Calendar events lookup — asks the model for a JSON list of dates.
//!
//! Any failure yields an empty list; the widget renders nothing in that case.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::chat::generate_with_timeout;
use super::persona::{PERSONA, events_prompt};
use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::GenerateRequest;
use crate::settings::ChatSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub tipo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub eventos: Vec<CalendarEvent>,
}

#[derive(Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub query: String,
}

/// Look up events for `query`. Never fails.
pub async fn lookup_events(llm: &dyn LlmChat, settings: &ChatSettings, query: &str) -> EventList {
    let query = query.trim();
    if query.is_empty() {
        return EventList::default();
    }

    let request = GenerateRequest {
        persona: PERSONA.to_string(),
        prompt: events_prompt(query),
        history: Vec::new(),
        generation: settings.generation.clone(),
    };

    let text = match generate_with_timeout(llm, &request, settings.remote_timeout).await {
        Ok(text) => text,
        Err(e) => {
            warn!(failure_kind = e.failure_kind().as_str(), code = e.error_code(), error = %e, "events: remote call failed");
            return EventList::default();
        }
    };

    let events = parse_event_list(&text).unwrap_or_default();
    info!(count = events.eventos.len(), "events: lookup complete");
    events
}

/// Parse the outermost `{...}` object embedded in free text.
#[must_use]
pub fn parse_event_list(text: &str) -> Option<EventList> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]) {
        Ok(list) => Some(list),
        Err(e) => {
            warn!(error = %e, "events: answer was not valid JSON");
            None
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
