//! Error types for travelbrief modules using thiserror.

use thiserror::Error;

/// How a failed generation call should be treated by the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rate or usage limit hit; wait longer before the next attempt.
    Quota,
    /// Anything else worth another try after a short pause.
    Transient,
    /// The call succeeded but the text held no usable JSON object.
    Unparseable,
}

/// Errors from startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Gemini API key not found. Set GEMINI_API_KEY (or GOOGLE_API_KEY) in the environment or a .env file"
    )]
    MissingApiKey,

    #[error("Model list is empty; pass at least one --model")]
    NoModels,

    #[error("Attempts per model must be at least 1")]
    ZeroAttempts,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors from the Gemini generateContent API.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Request to Gemini failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini returned HTTP {code}{}: {message}", status.as_deref().map(|s| format!(" ({s})")).unwrap_or_default())]
    Api {
        code: u16,
        status: Option<String>,
        message: String,
    },

    #[error("Gemini returned no text (finish reason: {})", finish_reason.as_deref().unwrap_or("unknown"))]
    EmptyResponse { finish_reason: Option<String> },

    #[error("Failed to decode Gemini response: {0}")]
    Decode(String),
}

impl GeminiError {
    /// Classify the failure for the retry loop.
    ///
    /// Quota exhaustion is signalled either by HTTP 429 or by the
    /// `RESOURCE_EXHAUSTED` status in Google's error envelope.
    pub fn kind(&self) -> FailureKind {
        match self {
            GeminiError::Api { code: 429, .. } => FailureKind::Quota,
            GeminiError::Api {
                status: Some(status),
                ..
            } if status == "RESOURCE_EXHAUSTED" => FailureKind::Quota,
            _ => FailureKind::Transient,
        }
    }
}

/// Errors from locating and parsing a JSON object in model output.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No JSON object found in response")]
    NoJsonObject,

    #[error("Found {count} top-level JSON objects in response; expected exactly one")]
    MultipleCandidates { count: usize },

    #[error("Response contains malformed JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Errors from the model fallback and retry loop.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Model {model} returned unparseable output: {source}")]
    Unparseable {
        model: String,
        #[source]
        source: ExtractError,
    },

    #[error("All {attempts} generation attempts failed. Last error: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<GenerateError>,
    },

    #[error(transparent)]
    Gemini(#[from] GeminiError),
}

impl GenerateError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GenerateError::Gemini(err) => err.kind(),
            GenerateError::Unparseable { .. } => FailureKind::Unparseable,
            GenerateError::Config(_) | GenerateError::RetriesExhausted { .. } => {
                FailureKind::Transient
            }
        }
    }
}

/// Errors from producing a travel summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Failed to generate travel summary: {0}")]
    Generation(#[from] GenerateError),

    #[error("Model output does not match the travel summary shape: {0}")]
    Schema(#[source] serde_json::Error),
}

/// Error from parsing a trip purpose.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid purpose '{0}'. Expected 'leisure' or 'business'")]
pub struct InvalidPurpose(pub String);
