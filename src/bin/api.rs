use anyhow::{Context, anyhow};
use std::sync::Arc;
use summarize_gateway::api::server::{self, AppState};
use summarize_gateway::clients::OpenAiCompletionClient;
use summarize_gateway::core::config::AppConfig;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    summarize_gateway::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow!("Config error: {e}"))?;
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; summarize requests will fail until it is");
    }

    let provider = Arc::new(OpenAiCompletionClient::from_config(&config));
    let addr = config.bind_addr();

    server::run(AppState::new(provider), addr)
        .await
        .with_context(|| format!("Failed to serve on {addr}"))
}
