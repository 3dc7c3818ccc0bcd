//! Inbound request handling and its transport bindings

pub mod handler;
pub mod helpers;
pub mod lambda;
pub mod server;

// Re-export the main handler for convenience
pub use handler::handle_summarize;
pub use helpers::ApiResponse;
