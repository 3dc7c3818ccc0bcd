/// Instruction placed in front of every caller-supplied text
pub const SUMMARY_INSTRUCTION: &str = "Summarize the following text:";

/// Completion model used for every request
pub const COMPLETION_MODEL: &str = "text-davinci-002";

/// Upper bound on generated tokens per summary
pub const MAX_SUMMARY_TOKENS: u32 = 250;

/// Sampling temperature sent with every request
pub const SUMMARY_TEMPERATURE: f32 = 0.5;

/// Builds the completion prompt for `text`.
///
/// The text is embedded unmodified, including when it is empty.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\n{text}")
}
