//! Gemini API integration.

pub mod client;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
