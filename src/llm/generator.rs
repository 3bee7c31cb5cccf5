//! The text-generation seam between the retry loop and a concrete backend.

use async_trait::async_trait;

use crate::error::GeminiError;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Default cap on generated tokens.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// A backend that turns a prompt into free-form text.
///
/// This abstraction allows mocking the remote service in tests. Failures
/// carry their own classification through [`GeminiError::kind`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation request against `model`.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeminiError>;
}
