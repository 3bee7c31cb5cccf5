//! HTTP client for the Gemini `generateContent` endpoint.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, GeminiError};
use crate::llm::{GenerationParams, TextGenerator};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of an unrecognised error body kept in error messages.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// An authenticated Gemini client scoped to a single invocation.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    /// Build a client, rejecting an empty credential up front.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: RequestGenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
            },
        };

        debug!(model, url = %self.endpoint(model), "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(GeminiError::Request)?;

        let status = response.status();
        let text = response.text().await.map_err(GeminiError::Request)?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &text));
        }

        parse_generate_response(&text)
    }
}

/// Turn a non-success response into a classified error.
///
/// Google APIs wrap failures as `{"error": {"code", "message", "status"}}`;
/// anything else keeps (a prefix of) the raw body as the message.
fn parse_api_error(code: u16, body: &str) -> GeminiError {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => GeminiError::Api {
            code,
            status: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => GeminiError::Api {
            code,
            status: None,
            message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        },
    }
}

/// Concatenate the text parts of the first candidate.
fn parse_generate_response(body: &str) -> Result<String, GeminiError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GeminiError::Decode(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GeminiError::EmptyResponse {
            finish_reason: response.prompt_feedback.and_then(|f| f.block_reason),
        });
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GeminiError::EmptyResponse {
            finish_reason: candidate.finish_reason,
        });
    }

    Ok(text)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
    status: Option<String>,
}
