mod error;
mod llm;
mod routes;
mod services;
mod settings;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let settings = settings::ChatSettings::from_env();
    let port = settings.port;

    // Non-fatal: requests answer 500 until GEMINI_API_KEY is configured.
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), api_key = client.masked_key(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat requests will fail");
            None
        }
    };

    let state = state::AppState::new(llm, settings);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "joao proxy listening");
    axum::serve(listener, app).await.expect("server failed");
}
