use super::*;
use crate::llm::types::LlmError;

struct FixedLlm(Result<&'static str, u16>);

#[async_trait::async_trait]
impl LlmChat for FixedLlm {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError> {
        assert!(request.prompt.contains("eventos"));
        match self.0 {
            Ok(text) => Ok(text.to_string()),
            Err(status) => Err(LlmError::ApiResponse { status, body: String::new() }),
        }
    }
}

const FENCED: &str = "```json\n{\"eventos\": [{\"data\": \"2025-11-20\", \"titulo\": \"Dia da Consciência Negra\", \
\"descricao\": \"Homenagem a Zumbi dos Palmares\", \"tipo\": \"feriado\"}]}\n```";

#[test]
fn parses_object_inside_fences() {
    let list = parse_event_list(FENCED).unwrap();
    assert_eq!(list.eventos.len(), 1);
    assert_eq!(list.eventos[0].data, "2025-11-20");
    assert_eq!(list.eventos[0].tipo, "feriado");
}

#[test]
fn rejects_text_without_object() {
    assert!(parse_event_list("Não encontrei eventos.").is_none());
    assert!(parse_event_list("} antes {").is_none());
    assert!(parse_event_list("{eventos: quebrado}").is_none());
}

#[test]
fn missing_eventos_key_is_empty_list() {
    assert_eq!(parse_event_list("{}"), Some(EventList::default()));
}

#[tokio::test]
async fn lookup_returns_events() {
    let list = lookup_events(&FixedLlm(Ok(FENCED)), &ChatSettings::default(), "novembro").await;
    assert_eq!(list.eventos[0].titulo, "Dia da Consciência Negra");
}

#[tokio::test]
async fn lookup_failure_is_empty() {
    let settings = ChatSettings::default();
    assert!(lookup_events(&FixedLlm(Err(500)), &settings, "novembro").await.eventos.is_empty());
    assert!(lookup_events(&FixedLlm(Ok("sem json")), &settings, "novembro").await.eventos.is_empty());
    assert!(lookup_events(&FixedLlm(Ok(FENCED)), &settings, "   ").await.eventos.is_empty());
}
