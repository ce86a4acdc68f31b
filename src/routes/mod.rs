//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the chat proxy endpoints used by the browser widget. The same
//! handler serves `/api/gemini` and the legacy Netlify function path so the
//! widget can point at either deployment unchanged.

pub mod chat;

use std::time::Duration;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::Json;
use axum::routing::{MethodRouter, get, post};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const PREFLIGHT_MAX_AGE_SECS: u64 = 86_400;

/// Full application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, HeaderName::from_static("x-requested-with")])
        .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS));

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/api/gemini", post_only(post(chat::proxy)))
        .route("/.netlify/functions/gemini-proxy", post_only(post(chat::proxy)))
        .route("/api/joao-chat", post_only(post(chat::joao_chat)))
        .route("/api/joao-events", post_only(post(chat::joao_events)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Unsupported methods get a 405 envelope. `OPTIONS` never reaches here; the
/// CORS layer answers it with an empty 200.
fn post_only(router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    router.fallback(chat::method_not_allowed)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Servidor João IA - Somos Um",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
