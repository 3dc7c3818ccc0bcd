use crate::clients::CompletionProvider;
use crate::errors::GatewayError;
use crate::prompt::build_prompt;

/// Summarize `text` with the given completion provider.
///
/// The text is wrapped in the fixed summary prompt and the provider's
/// output is returned untouched. Empty input is forwarded like any other.
pub async fn summarize(
    provider: &dyn CompletionProvider,
    text: &str,
) -> Result<String, GatewayError> {
    let prompt = build_prompt(text);
    provider.complete(&prompt).await
}
