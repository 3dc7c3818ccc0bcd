/// Summarize Gateway - a thin HTTP service that turns text into a summary
/// by forwarding it to a text-completion API.
///
/// `POST /summarize` with `{"text": "..."}` answers `{"summary": "..."}`, or
/// `{"error": "..."}` with a 400 for malformed bodies and a 500 for anything
/// that goes wrong talking to the completion provider.
///
/// # Architecture
///
/// - `api::handler` holds the transport-agnostic request handling
/// - `api::server` binds it to an axum HTTP listener
/// - `api::lambda` binds it to API Gateway proxy events for AWS Lambda
/// - `clients` wraps the completion API behind the `CompletionProvider` trait
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use summarize_gateway::api::server::{AppState, run};
/// use summarize_gateway::clients::OpenAiCompletionClient;
/// use summarize_gateway::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     summarize_gateway::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let provider = Arc::new(OpenAiCompletionClient::from_config(&config));
///     run(AppState::new(provider), config.bind_addr()).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;

pub use clients::{CompletionProvider, OpenAiCompletionClient};
pub use errors::GatewayError;
pub use features::summarize;

/// Configure structured JSON logging.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// summarize_gateway::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
