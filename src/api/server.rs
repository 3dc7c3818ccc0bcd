//! HTTP listener binding using axum

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handler::handle_summarize;
use super::helpers::ApiResponse;
use crate::clients::CompletionProvider;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}

/// Create the gateway router
///
/// Request bodies are unbounded: the text length is not capped.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize_route))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

// Takes the raw body so decode failures keep the `{"error": ..}` contract
// instead of axum's plain-text JSON rejection.
async fn summarize_route(State(state): State<AppState>, body: Bytes) -> ApiResponse {
    handle_summarize(state.provider.as_ref(), &body).await
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Serve the gateway on `addr` until Ctrl-C or SIGTERM.
pub async fn run(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Summarize gateway listening on {}", listener.local_addr()?);
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
