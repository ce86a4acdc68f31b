//! Chat proxy routes.
//!
//! Every response is JSON. Validation and configuration failures carry an
//! error status; remote failures never do, since the pipeline absorbs them.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::services::chat::{self, ChatOutcome};
use crate::services::events::{self, EventList, EventsQuery};
use crate::services::input::{ChatError, parse_chat_request};
use crate::state::AppState;

const SUGGESTIONS: [&str; 4] = ["Educador", "Estudante", "Biblioteca", "Calendário"];

/// `{status, resposta}` envelope returned by the proxy endpoints.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    pub resposta: String,
}

impl Envelope {
    fn success(resposta: String) -> Self {
        Self { status: "success", resposta }
    }

    fn error(resposta: &str) -> Self {
        Self { status: "error", resposta: resposta.to_string() }
    }
}

/// `{reply, suggestions}` shape used by the widget endpoint.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub suggestions: Vec<&'static str>,
}

/// `POST /api/gemini` — validate, route, answer.
pub async fn proxy(State(state): State<AppState>, body: Bytes) -> Response {
    let span = info_span!("chat", request_id = %Uuid::new_v4(), endpoint = "proxy");
    async move {
        match run_chat(&state, &body).await {
            Ok(outcome) => (StatusCode::OK, Json(Envelope::success(outcome.answer))).into_response(),
            Err(err) => {
                let (status, message) = chat_error_to_status(&err);
                (status, Json(Envelope::error(message))).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// `POST /api/joao-chat` — same pipeline, widget reply shape.
pub async fn joao_chat(State(state): State<AppState>, body: Bytes) -> Response {
    let span = info_span!("chat", request_id = %Uuid::new_v4(), endpoint = "joao_chat");
    async move {
        match run_chat(&state, &body).await {
            Ok(outcome) => {
                let reply = ChatReply { reply: outcome.answer, suggestions: SUGGESTIONS.to_vec() };
                (StatusCode::OK, Json(reply)).into_response()
            }
            Err(err) => {
                let (status, message) = chat_error_to_status(&err);
                (status, Json(ChatReply { reply: message.to_string(), suggestions: Vec::new() })).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// `POST /api/joao-events` — calendar lookup, empty list on any failure.
pub async fn joao_events(State(state): State<AppState>, body: Bytes) -> Json<EventList> {
    let span = info_span!("events", request_id = %Uuid::new_v4());
    async move {
        let query = match serde_json::from_slice::<EventsQuery>(&body) {
            Ok(parsed) => parsed.query,
            Err(e) => {
                warn!(error = %e, "events: malformed body");
                return Json(EventList::default());
            }
        };
        let Some(llm) = state.llm.as_deref() else {
            warn!("events: remote model not configured");
            return Json(EventList::default());
        };
        Json(events::lookup_events(llm, &state.settings, &query).await)
    }
    .instrument(span)
    .await
}

pub async fn method_not_allowed() -> (StatusCode, Json<Envelope>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(Envelope::error("Método não permitido.")))
}

async fn run_chat(state: &AppState, body: &[u8]) -> Result<ChatOutcome, ChatError> {
    let result = accept_and_answer(state, body).await;
    match &result {
        Ok(outcome) => info!(source = ?outcome.source, chars = outcome.answer.chars().count(), "chat: answered"),
        Err(err) => warn!(code = err.error_code(), error = %err, "chat: request rejected"),
    }
    result
}

async fn accept_and_answer(state: &AppState, body: &[u8]) -> Result<ChatOutcome, ChatError> {
    let text = std::str::from_utf8(body).map_err(|e| ChatError::MalformedInput(e.to_string()))?;
    let request = parse_chat_request(text)?;
    let llm = state.llm.as_deref().ok_or(ChatError::MissingConfiguration)?;
    info!(prompt_chars = request.prompt.chars().count(), history = request.history.len(), "chat: request accepted");
    Ok(chat::answer(llm, &state.settings, &request).await)
}

pub(crate) fn chat_error_to_status(err: &ChatError) -> (StatusCode, &'static str) {
    match err {
        ChatError::MalformedInput(_) => (
            StatusCode::BAD_REQUEST,
            "Formato de requisição inválido. Envie um JSON válido com campo 'prompt'.",
        ),
        ChatError::EmptyPrompt => (StatusCode::BAD_REQUEST, "Por favor, digite sua pergunta no campo 'prompt'."),
        ChatError::MissingConfiguration => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Erro de configuração do servidor. API KEY não encontrada.")
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
