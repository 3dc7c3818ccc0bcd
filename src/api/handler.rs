//! Transport-agnostic `/summarize` handler.
//!
//! Both the HTTP listener and the Lambda entrypoint funnel the raw request
//! body through [`handle_summarize`]; they only differ in how the resulting
//! [`ApiResponse`] is written back.

use serde_json::{Map, Value};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers::{self, ApiResponse};
use crate::clients::CompletionProvider;
use crate::core::models::SummarizeRequest;
use crate::errors::GatewayError;
use crate::features::summarize;

/// Decodes `{"text": ..}` from `body` and answers with the summary.
///
/// Malformed bodies yield a 400, any failure while summarizing a 500. Both
/// carry `{"error": <message>}`.
pub async fn handle_summarize(provider: &dyn CompletionProvider, body: &[u8]) -> ApiResponse {
    let request_id = Uuid::new_v4();

    let request = match decode_request(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(%request_id, error = %e, "Rejected malformed summarize request");
            return helpers::from_error(&e);
        }
    };

    info!(
        %request_id,
        text_chars = request.text.chars().count(),
        "Summarize request received"
    );

    match summarize(provider, &request.text).await {
        Ok(summary) => {
            info!(%request_id, summary_chars = summary.chars().count(), "Summary generated");
            helpers::ok_summary(summary)
        }
        Err(e) => {
            error!(%request_id, error = %e, "Failed to generate summary");
            helpers::from_error(&e)
        }
    }
}

/// Parses the inbound body. Any decoder failure becomes a `BadRequest`.
///
/// The body must be a JSON object: decoding goes through a map first since
/// derived structs would also accept a positional array.
pub fn decode_request(body: &[u8]) -> Result<SummarizeRequest, GatewayError> {
    let object: Map<String, Value> =
        serde_json::from_slice(body).map_err(|e| GatewayError::BadRequest(e.to_string()))?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| GatewayError::BadRequest(e.to_string()))
}
