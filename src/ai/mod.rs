#[cfg(feature = "gemini")]
pub mod gemini;
pub mod prompts;

use thiserror::Error;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("model returned no text")]
    EmptyResponse,
}

/// Anything that turns a prompt into text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
