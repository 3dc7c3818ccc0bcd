// Lambda entry point: API Gateway proxy events in, proxy responses out

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use std::sync::Arc;
use summarize_gateway::api::{ApiResponse, lambda};
use summarize_gateway::clients::{CompletionProvider, OpenAiCompletionClient};
use summarize_gateway::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    summarize_gateway::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let provider: Arc<dyn CompletionProvider> =
        Arc::new(OpenAiCompletionClient::from_config(&config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let provider = Arc::clone(&provider);
        async move {
            let response = lambda::handle_event(provider.as_ref(), &event.payload).await;
            Ok::<ApiResponse, Error>(response)
        }
    }))
    .await
}
