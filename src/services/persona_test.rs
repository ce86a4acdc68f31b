use super::*;

#[test]
fn plain_prompt_unchanged() {
    assert_eq!(contextualize("Como ensinar samba?", &[]), "Como ensinar samba?");
}

#[test]
fn referential_prompt_gets_domain_clause() {
    let out = contextualize("Quais outros ritmos existem?", &[]);
    assert!(out.starts_with("(Contexto:"));
    assert!(out.ends_with("Quais outros ritmos existem?"));
}

#[test]
fn referential_prompt_quotes_previous_user_turn() {
    let history = vec![
        Turn { role: Role::User, text: "Fale sobre o samba de roda".into() },
        Turn { role: Role::Model, text: "O samba de roda é...".into() },
    ];
    let out = contextualize("E também o maracatu?", &history);
    assert!(out.contains("\"Fale sobre o samba de roda\""));
    assert!(out.ends_with("E também o maracatu?"));
}

#[test]
fn referential_match_is_word_based() {
    // "elaborar" contains "ela" but is not a pronoun.
    assert_eq!(contextualize("Como elaborar uma aula?", &[]), "Como elaborar uma aula?");
}

#[test]
fn events_prompt_embeds_query_and_format() {
    let prompt = events_prompt("novembro");
    assert!(prompt.contains("\"novembro\""));
    assert!(prompt.contains("\"eventos\""));
    assert!(prompt.contains("YYYY-MM-DD"));
}
