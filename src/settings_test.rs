use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let settings = ChatSettings::from_vars(vars(&[]));
    assert_eq!(settings, ChatSettings::default());
    assert_eq!(settings.remote_timeout, Duration::from_secs(15));
    assert_eq!(settings.bounds, AnswerBounds { min_chars: 50, max_chars: 1500 });
    assert_eq!(settings.history_window, 5);
    assert_eq!(settings.port, 3001);
}

#[test]
fn overrides_parsed() {
    let settings = ChatSettings::from_vars(vars(&[
        ("REMOTE_TIMEOUT_SECS", "8"),
        ("LLM_TEMPERATURE", "0.2"),
        ("LLM_TOP_K", "10"),
        ("LLM_MAX_OUTPUT_TOKENS", "800"),
        ("ANSWER_MIN_CHARS", "20"),
        ("ANSWER_MAX_CHARS", "900"),
        ("HISTORY_WINDOW", "3"),
        ("PORT", "8080"),
    ]));
    assert_eq!(settings.remote_timeout, Duration::from_secs(8));
    assert!((settings.generation.temperature - 0.2).abs() < f32::EPSILON);
    assert!((settings.generation.top_p - 0.8).abs() < f32::EPSILON);
    assert_eq!(settings.generation.top_k, 10);
    assert_eq!(settings.generation.max_output_tokens, 800);
    assert_eq!(settings.bounds, AnswerBounds { min_chars: 20, max_chars: 900 });
    assert_eq!(settings.history_window, 3);
    assert_eq!(settings.port, 8080);
}

#[test]
fn garbage_values_fall_back() {
    let settings = ChatSettings::from_vars(vars(&[("PORT", "http"), ("LLM_TOP_P", "high"), ("REMOTE_TIMEOUT_SECS", "-1")]));
    assert_eq!(settings.port, DEFAULT_PORT);
    assert!((settings.generation.top_p - 0.8).abs() < f32::EPSILON);
    assert_eq!(settings.remote_timeout, Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS));
}

#[test]
fn zero_timeout_clamped_to_one_second() {
    let settings = ChatSettings::from_vars(vars(&[("REMOTE_TIMEOUT_SECS", "0")]));
    assert_eq!(settings.remote_timeout, Duration::from_secs(1));
}

#[test]
fn inverted_bounds_use_defaults() {
    let settings = ChatSettings::from_vars(vars(&[("ANSWER_MIN_CHARS", "500"), ("ANSWER_MAX_CHARS", "100")]));
    assert_eq!(settings.bounds, AnswerBounds::default());
}
