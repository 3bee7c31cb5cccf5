//! travelbrief - A CLI tool that generates structured travel summaries.
//!
//! # Overview
//!
//! travelbrief asks the Gemini API for a short travel brief about a place,
//! falls back across a list of models with bounded retries, extracts the
//! JSON object from the model's reply, normalizes it, and validates it
//! against the [`TravelSummary`] shape.

pub mod config;
pub mod error;
pub mod gemini;
pub mod llm;
pub mod travel;

// Re-export commonly used types
pub use error::{ConfigError, ExtractError, FailureKind, GeminiError, GenerateError, SummaryError};
pub use gemini::GeminiClient;
pub use llm::{GenerationParams, RetryPolicy, TextGenerator};
pub use travel::{Purpose, TravelSummary, summarize};
