use super::*;

#[test]
fn status_taxonomy() {
    assert_eq!(FailureKind::from_status(400), FailureKind::BadRequest);
    assert_eq!(FailureKind::from_status(401), FailureKind::Auth);
    assert_eq!(FailureKind::from_status(403), FailureKind::Auth);
    assert_eq!(FailureKind::from_status(429), FailureKind::RateLimited);
    assert_eq!(FailureKind::from_status(500), FailureKind::Server);
    assert_eq!(FailureKind::from_status(503), FailureKind::Server);
    assert_eq!(FailureKind::from_status(404), FailureKind::Other);
}

#[test]
fn failure_kind_for_non_http_errors() {
    assert_eq!(LlmError::Timeout { secs: 15 }.failure_kind(), FailureKind::Timeout);
    assert_eq!(LlmError::ApiRequest("reset".into()).failure_kind(), FailureKind::Network);
    assert_eq!(LlmError::UnrecognizedResponseShape.failure_kind(), FailureKind::Shape);
    assert_eq!(LlmError::ApiParse("eof".into()).failure_kind(), FailureKind::Shape);
}

#[test]
fn retryable_errors() {
    assert!(LlmError::Timeout { secs: 1 }.retryable());
    assert!(LlmError::ApiResponse { status: 429, body: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 502, body: String::new() }.retryable());
    assert!(!LlmError::ApiResponse { status: 403, body: String::new() }.retryable());
    assert!(!LlmError::UnrecognizedResponseShape.retryable());
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(LlmError::Timeout { secs: 1 }.error_code(), "E_REMOTE_TIMEOUT");
    assert_eq!(LlmError::UnrecognizedResponseShape.error_code(), "E_UNRECOGNIZED_RESPONSE_SHAPE");
    assert_eq!(LlmError::ApiResponse { status: 500, body: String::new() }.error_code(), "E_API_RESPONSE");
}

#[test]
fn api_response_display_hides_body() {
    let err = LlmError::ApiResponse { status: 403, body: "key=secret".into() };
    let text = err.to_string();
    assert!(text.contains("403"));
    assert!(!text.contains("secret"));
}

#[test]
fn generation_defaults() {
    let cfg = GenerationConfig::default();
    assert!((cfg.temperature - 0.7).abs() < f32::EPSILON);
    assert!((cfg.top_p - 0.8).abs() < f32::EPSILON);
    assert_eq!(cfg.top_k, 40);
    assert_eq!(cfg.max_output_tokens, 500);
    assert!(cfg.stop_sequences.is_empty());
}
