//! Response builders shared by the HTTP and Lambda bindings.

use serde::Serialize;
use serde_json::json;

use crate::core::models::{ErrorResponse, SummarizeResponse};
use crate::errors::GatewayError;

/// Status code plus serialized JSON body.
///
/// Serializes as `{"statusCode": .., "body": ".."}`, the shape API Gateway
/// expects back from a proxy integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

/// Returns a 200 OK response carrying the summary.
#[must_use]
pub fn ok_summary(summary: String) -> ApiResponse {
    ApiResponse {
        status_code: 200,
        body: to_body(&SummarizeResponse { summary }),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status_code,
        body: to_body(&ErrorResponse {
            error: message.to_string(),
        }),
    }
}

/// Maps a gateway failure onto its status code and `{"error": ..}` body.
#[must_use]
pub fn from_error(error: &GatewayError) -> ApiResponse {
    err_response(error.status_code(), &error.to_string())
}

fn to_body<T: Serialize>(payload: &T) -> String {
    // Both payloads are a single string field, so serialization cannot fail
    serde_json::to_string(payload).unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
}
