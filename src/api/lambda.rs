//! API Gateway proxy event adapter.
//!
//! Pulls the path and body out of a proxy event and hands the body to the
//! shared handler. Kept free of `lambda_runtime` types so it can be driven
//! from tests without the `lambda` feature.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::{error, info};

use super::handler::handle_summarize;
use super::helpers::{self, ApiResponse};
use crate::clients::CompletionProvider;

const SUMMARIZE_PATH: &str = "/summarize";

/// Handle one API Gateway proxy event (REST or HTTP API payload).
pub async fn handle_event(provider: &dyn CompletionProvider, payload: &Value) -> ApiResponse {
    let path_opt = payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()));

    if let Some(path) = path_opt {
        info!(raw_path = %path, "Request path");
        if !path.ends_with(SUMMARIZE_PATH) {
            return helpers::err_response(404, "not found");
        }
    }

    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(response) => return response,
    };

    handle_summarize(provider, &body).await
}

fn extract_body(payload: &Value) -> Result<Vec<u8>, ApiResponse> {
    // A missing body falls through to the decoder, which reports it as a 400
    let Some(body) = payload.get("body").filter(|b| !b.is_null()) else {
        return Ok(Vec::new());
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        STANDARD.decode(body_str).map_err(|e| {
            error!("Failed to decode base64 body: {}", e);
            helpers::err_response(400, &format!("Invalid base64 body: {e}"))
        })
    } else {
        Ok(body_str.as_bytes().to_vec())
    }
}
