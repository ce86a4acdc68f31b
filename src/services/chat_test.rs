use super::*;
use crate::services::input::HistoryEntry;
use crate::services::knowledge::{DEGENERATE_ANSWER_REPLY, GREETING_REPLY, OUT_OF_SCOPE_REPLY};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// MockLlm
// =========================================================================

enum Behavior {
    Reply(&'static str),
    Status(u16),
    Shape,
    Hang,
}

struct MockLlm {
    behavior: Behavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerateRequest>>,
}

impl MockLlm {
    fn new(behavior: Behavior) -> Self {
        Self { behavior, calls: AtomicUsize::new(0), last_request: Mutex::new(None) }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.behavior {
            Behavior::Reply(text) => Ok((*text).to_string()),
            Behavior::Status(status) => Err(LlmError::ApiResponse { status: *status, body: "{}".into() }),
            Behavior::Shape => Err(LlmError::UnrecognizedResponseShape),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("late".into())
            }
        }
    }
}

const REMOTE_PROMPT: &str = "Sugira filmes sobre a diáspora africana";
const REMOTE_REPLY: &str = "## Sugestões\n**Vista Minha Pele** e *Besouro* são bons filmes para discutir identidade \
e resistência negra em sala de aula";

fn settings() -> ChatSettings {
    ChatSettings::default()
}

fn entry(text: &str, is_user: bool) -> HistoryEntry {
    HistoryEntry { text: text.into(), is_user, timestamp: None }
}

// =========================================================================
// local routes
// =========================================================================

#[tokio::test]
async fn greeting_answered_without_remote_call() {
    let llm = MockLlm::new(Behavior::Reply(REMOTE_REPLY));
    let outcome = answer(&llm, &settings(), &ChatRequest::new("Olá!")).await;

    assert_eq!(outcome.source, AnswerSource::Local("greeting"));
    assert_eq!(outcome.answer, GREETING_REPLY);
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn out_of_scope_answered_verbatim_without_remote_call() {
    let llm = MockLlm::new(Behavior::Reply(REMOTE_REPLY));
    let outcome = answer(&llm, &settings(), &ChatRequest::new("Quem ganha o brasileirão?")).await;

    assert_eq!(outcome.source, AnswerSource::Local("out_of_scope"));
    assert_eq!(outcome.answer, OUT_OF_SCOPE_REPLY);
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn knowledge_hit_answered_locally() {
    let llm = MockLlm::new(Behavior::Status(500));
    let outcome = answer(&llm, &settings(), &ChatRequest::new("Quais outros líderes além de Zumbi?")).await;

    assert_eq!(outcome.source, AnswerSource::Local("leaders_besides_zumbi"));
    assert!(outcome.answer.contains("Dandara"));
    assert_eq!(llm.calls(), 0);
}

// =========================================================================
// remote route
// =========================================================================

#[tokio::test]
async fn remote_answer_normalized() {
    let llm = MockLlm::new(Behavior::Reply(REMOTE_REPLY));
    let outcome = answer(&llm, &settings(), &ChatRequest::new(REMOTE_PROMPT)).await;

    assert_eq!(outcome.source, AnswerSource::Remote);
    assert_eq!(llm.calls(), 1);
    assert!(outcome.answer.starts_with("Sugestões\nVista Minha Pele e Besouro"));
    assert!(outcome.answer.ends_with("sala de aula."));
    assert!(!outcome.answer.contains('*'));
}

#[tokio::test]
async fn remote_request_carries_persona_and_generation() {
    let llm = MockLlm::new(Behavior::Reply(REMOTE_REPLY));
    let _ = answer(&llm, &settings(), &ChatRequest::new(REMOTE_PROMPT)).await;

    let sent = llm.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(sent.persona, PERSONA);
    assert_eq!(sent.prompt, REMOTE_PROMPT);
    assert_eq!(sent.generation, settings().generation);
    assert!(sent.history.is_empty());
}

#[tokio::test]
async fn degenerate_remote_answer_replaced_by_template() {
    let llm = MockLlm::new(Behavior::Reply("Ok."));
    let outcome = answer(&llm, &settings(), &ChatRequest::new(REMOTE_PROMPT)).await;

    assert_eq!(outcome.source, AnswerSource::Remote);
    assert_eq!(outcome.answer, DEGENERATE_ANSWER_REPLY);
}

// =========================================================================
// failures are absorbed
// =========================================================================

#[tokio::test]
async fn remote_failure_uses_keyword_fallback() {
    for behavior in [Behavior::Status(500), Behavior::Status(403), Behavior::Status(429), Behavior::Shape] {
        let llm = MockLlm::new(behavior);
        let outcome = answer(&llm, &settings(), &ChatRequest::new("Como falar de samba na escola?")).await;

        assert_eq!(outcome.source, AnswerSource::Fallback);
        assert!(outcome.answer.contains("samba"));
        assert_eq!(llm.calls(), 1);
    }
}

#[tokio::test]
async fn remote_failure_without_keyword_uses_apology() {
    let llm = MockLlm::new(Behavior::Status(503));
    let outcome = answer(&llm, &settings(), &ChatRequest::new(REMOTE_PROMPT)).await;

    assert_eq!(outcome.source, AnswerSource::Fallback);
    assert!(APOLOGY_REPLIES.contains(&outcome.answer.as_str()), "unexpected answer {:?}", outcome.answer);
}

#[tokio::test]
async fn remote_timeout_bounded_and_absorbed() {
    let llm = MockLlm::new(Behavior::Hang);
    let settings = ChatSettings { remote_timeout: Duration::from_millis(50), ..ChatSettings::default() };

    let started = Instant::now();
    let outcome = answer(&llm, &settings, &ChatRequest::new(REMOTE_PROMPT)).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(outcome.source, AnswerSource::Fallback);
    assert!(APOLOGY_REPLIES.contains(&outcome.answer.as_str()));
}

#[tokio::test]
async fn generate_with_timeout_reports_timeout() {
    let llm = MockLlm::new(Behavior::Hang);
    let request = build_generate_request(&settings(), &ChatRequest::new(REMOTE_PROMPT));
    let err = generate_with_timeout(&llm, &request, Duration::from_millis(20)).await.unwrap_err();

    assert!(matches!(err, LlmError::Timeout { .. }));
    assert_eq!(err.error_code(), "E_REMOTE_TIMEOUT");
}

#[test]
fn every_apology_survives_normalization() {
    for reply in APOLOGY_REPLIES {
        assert_eq!(normalize(reply, AnswerBounds::default()), *reply);
    }
}

// =========================================================================
// build_generate_request
// =========================================================================

#[test]
fn history_limited_to_window() {
    let mut request = ChatRequest::new(REMOTE_PROMPT);
    request.history = (0..8).map(|i| entry(&format!("mensagem {i}"), i % 2 == 0)).collect();

    let built = build_generate_request(&settings(), &request);
    assert_eq!(built.history.len(), 5);
    assert_eq!(built.history[0].text, "mensagem 3");
    assert_eq!(built.history[4].text, "mensagem 7");
    assert_eq!(built.history[4].role, Role::Model);
}

#[test]
fn trailing_copy_of_prompt_dropped_from_history() {
    let mut request = ChatRequest::new(REMOTE_PROMPT);
    request.history = vec![entry("Oi", true), entry("Olá! Eu sou o João...", false), entry(REMOTE_PROMPT, true)];

    let built = build_generate_request(&settings(), &request);
    assert_eq!(built.history.len(), 2);
    assert_eq!(built.history[1].role, Role::Model);
}

#[test]
fn referential_prompt_contextualized_with_history() {
    let mut request = ChatRequest::new("Quais outros ritmos existem?");
    request.history = vec![entry("Fale sobre o jongo", true), entry("O jongo é uma dança...", false)];

    let built = build_generate_request(&settings(), &request);
    assert!(built.prompt.contains("\"Fale sobre o jongo\""));
    assert!(built.prompt.ends_with("Quais outros ritmos existem?"));
}
