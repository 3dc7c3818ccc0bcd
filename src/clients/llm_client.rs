//! Completion provider client
//!
//! Wraps the text-completion API used to generate summaries behind the
//! [`CompletionProvider`] trait so the gateway can be handed a stub in tests.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::GatewayError;
use crate::prompt::{COMPLETION_MODEL, MAX_SUMMARY_TOKENS, SUMMARY_TEMPERATURE};

pub const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// Outbound body for the completions endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl<'a> CompletionRequest<'a> {
    #[must_use]
    pub fn for_prompt(prompt: &'a str) -> Self {
        Self {
            model: COMPLETION_MODEL,
            prompt,
            max_tokens: MAX_SUMMARY_TOKENS,
            temperature: SUMMARY_TEMPERATURE,
        }
    }
}

/// Response body of the completions endpoint.
///
/// Every level falls back to an `Other` arm instead of failing, so a
/// malformed payload is classified by [`CompletionResponse::into_summary`]
/// rather than rejected by the decoder.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CompletionResponse {
    body: CompletionBody,
}

// Arms ahead of `Object` catch what serde would otherwise coerce into a
// struct: arrays decode positionally and would fill `choices`.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CompletionBody {
    Sequence(Vec<IgnoredAny>),
    Object(CompletionObject),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct CompletionObject {
    choices: Option<ChoicesField>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChoicesField {
    List(Vec<ChoiceField>),
    Other(IgnoredAny),
}

// `Sequence` must come before `Object`: serde accepts arrays for structs.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChoiceField {
    Sequence(Vec<IgnoredAny>),
    Object(Choice),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: Option<TextField>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextField {
    Text(String),
    Other(IgnoredAny),
}

impl CompletionResponse {
    /// Extracts `choices[0].text` verbatim.
    ///
    /// A body that is not a JSON object (`null` included) has no `choices`.
    pub fn into_summary(self) -> Result<String, GatewayError> {
        let CompletionBody::Object(object) = self.body else {
            return Err(GatewayError::NoSummary);
        };

        let Some(ChoicesField::List(choices)) = object.choices else {
            return Err(GatewayError::NoSummary);
        };

        let Some(first) = choices.into_iter().next() else {
            return Err(GatewayError::NoSummary);
        };

        match first {
            ChoiceField::Object(choice) => match choice.text {
                Some(TextField::Text(text)) => Ok(text),
                Some(TextField::Other(_)) | None => Err(GatewayError::MissingSummary),
            },
            ChoiceField::Sequence(_) | ChoiceField::Other(_) => Err(GatewayError::InvalidFormat),
        }
    }
}

/// HTTP client for the `OpenAI` completions API
pub struct OpenAiCompletionClient {
    http: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenAiCompletionClient {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, OPENAI_COMPLETIONS_URL)
    }

    /// Builds a client that posts to `endpoint` instead of the production URL.
    #[must_use]
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.openai_api_key.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::Configuration(
                    "OPENAI_API_KEY environment variable is not set".to_string(),
                )
            })?;

        info!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.chars().count(),
            "Requesting completion"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .json(&CompletionRequest::for_prompt(prompt))
            .send()
            .await?;

        // The body decides success; an error payload has no `choices`.
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Completion provider returned a non-success status");
        }

        let body = response.bytes().await?;
        let parsed: CompletionResponse = serde_json::from_slice(&body)?;
        parsed.into_summary()
    }
}
