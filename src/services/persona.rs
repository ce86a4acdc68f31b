//! Persona text and prompt shaping for remote calls.

use crate::llm::types::{Role, Turn};

use super::router::{contains_phrase, fold};

/// System instruction sent with every remote call.
pub const PERSONA: &str = "Você é o \"João\", assistente virtual especializado da plataforma \"Somos Um\" \
para educadores.

CONTEXTO E IDENTIDADE:
- Especialista em educação, História e Cultura Afro-Brasileira e Lei 10.639/2003.
- Foco principal: auxiliar professores na preparação de aulas, planos de ensino e recursos didáticos.
- Especialização: Educação Antirracista e Práticas Pedagógicas Inclusivas.

REGRAS DE RESPOSTA:
1. Use linguagem profissional e pedagógica apropriada para educadores.
2. Responda de forma concisa e direta (máximo 250 palavras).
3. Faça referência à Lei 10.639/2003 quando relevante.
4. Sugira recursos, atividades ou estratégias práticas para sala de aula.
5. Considere os diferentes níveis de ensino (Fundamental I, II, Médio, Superior).
6. Não use formatação markdown, listas ou emojis; apenas texto corrido.

PERGUNTAS FORA DO ESCOPO:
- Se a pergunta estiver fora do contexto educacional, responda: \"Como assistente especializado em \
educação da plataforma Somos Um, posso ajudar você com questões relacionadas a planos de aula, Lei \
10.639/2003, recursos didáticos ou práticas pedagógicas. Tem alguma dúvida nessa área?\"
- Se a pergunta for genérica demais, peça o nível de ensino ou o aspecto específico.

PLATAFORMA:
- Somos Um é dedicada ao ensino da História e Cultura Afro-Brasileira.
- Recursos: planos de aula, calendário afro-brasileiro, biblioteca, ferramentas para educadores.";

/// Words that make a prompt lean on earlier context.
const REFERENTIAL_TERMS: &[&str] = &["outros", "outras", "tambem", "alem disso", "others", "also", "ele", "ela", "eles", "elas"];

/// Prefix referential prompts with a clause that anchors them to the domain
/// and, when available, to the previous user question.
#[must_use]
pub fn contextualize(prompt: &str, history: &[Turn]) -> String {
    let folded = fold(prompt);
    if !REFERENTIAL_TERMS.iter().any(|t| contains_phrase(&folded, t)) {
        return prompt.to_string();
    }

    let previous = history
        .iter()
        .rev()
        .find(|turn| turn.role == Role::User && turn.text.trim() != prompt.trim());

    match previous {
        Some(turn) => format!(
            "(Contexto: esta pergunta dá continuidade à pergunta anterior \"{}\", no tema de História e Cultura \
Afro-Brasileira.) {prompt}",
            turn.text.trim()
        ),
        None => format!(
            "(Contexto: esta pergunta se refere à conversa sobre História e Cultura Afro-Brasileira.) {prompt}"
        ),
    }
}

/// Instruction for the calendar events lookup. The model must answer JSON only.
#[must_use]
pub fn events_prompt(query: &str) -> String {
    format!(
        "Para a plataforma \"Somos Um\" (cultura afro-brasileira), liste eventos e datas importantes com base \
nesta pergunta: \"{query}\".

Retorne APENAS JSON válido no formato:
{{\"eventos\": [{{\"data\": \"YYYY-MM-DD\", \"titulo\": \"Nome do evento\", \"descricao\": \"Descrição breve\", \
\"tipo\": \"cultural|historico|feriado\"}}]}}

Inclua apenas eventos relevantes para a cultura afro-brasileira."
    )
}

#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;
