#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use summarize_gateway::clients::CompletionProvider;
use summarize_gateway::errors::GatewayError;

/// Provider double that answers every prompt the same way and records what
/// it was asked.
pub struct StubProvider {
    reply: Result<String, fn() -> GatewayError>,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn replying(summary: &str) -> Self {
        Self {
            reply: Ok(summary.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make_error: fn() -> GatewayError) -> Self {
        Self {
            reply: Err(make_error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(summary) => Ok(summary.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

pub fn json_body(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("response body should be JSON")
}
