//! Model fallback, retry, and JSON extraction for generated text.

pub mod generator;
pub mod json;
pub mod retry;

pub use generator::{GenerationParams, TextGenerator};
pub use json::extract_json_object;
pub use retry::{FailedAttempt, Generation, RetryPolicy, generate_json};
