//! Model fallback with fixed-delay retries.
//!
//! Each model in the priority list gets a bounded number of attempts.
//! Ordinary failures pause for a short constant delay, quota exhaustion
//! pauses for a longer one, and the first response that yields a JSON
//! object wins.

use std::time::Duration;

use backoff::backoff::{Backoff, Constant};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, FailureKind, GenerateError};

use super::generator::{GenerationParams, TextGenerator};
use super::json::extract_json_object;

/// Models tried in order when none are given explicitly.
pub const DEFAULT_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"];

/// Configuration: 3 attempts per model, 2s between failures, 30s after quota errors.
pub const DEFAULT_ATTEMPTS_PER_MODEL: u32 = 3;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 2;
pub const DEFAULT_QUOTA_WAIT_SECS: u64 = 30;

/// How the retry loop walks the model list.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub models: Vec<String>,
    pub attempts_per_model: u32,
    pub retry_delay: Duration,
    pub quota_wait: Duration,
    /// Treat unparseable output as an ordinary failure instead of aborting.
    pub retry_unparseable: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            attempts_per_model: DEFAULT_ATTEMPTS_PER_MODEL,
            retry_delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
            quota_wait: Duration::from_secs(DEFAULT_QUOTA_WAIT_SECS),
            retry_unparseable: false,
        }
    }
}

impl RetryPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.models.is_empty() {
            return Err(ConfigError::NoModels);
        }
        if self.attempts_per_model == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// One failed attempt, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedAttempt {
    pub model: String,
    pub attempt: u32,
    pub kind: FailureKind,
    /// Pause taken before the next attempt; `None` when moving on to the
    /// next model or giving up.
    pub delay: Option<Duration>,
}

/// Successful generation with metadata.
#[derive(Debug)]
pub struct Generation {
    pub object: Map<String, Value>,
    pub model: String,
    pub failures: Vec<FailedAttempt>,
}

impl Generation {
    /// Number of pauses of the given kind taken before success.
    pub fn delays_of(&self, kind: FailureKind) -> usize {
        self.failures
            .iter()
            .filter(|f| f.kind == kind && f.delay.is_some())
            .count()
    }
}

/// Generate a JSON object, falling back through the policy's models.
///
/// Unparseable output aborts the whole routine unless the policy sets
/// `retry_unparseable`. When every attempt fails the last error is
/// wrapped in [`GenerateError::RetriesExhausted`].
pub async fn generate_json<G: TextGenerator + ?Sized>(
    generator: &G,
    prompt: &str,
    policy: &RetryPolicy,
    params: &GenerationParams,
) -> Result<Generation, GenerateError> {
    policy.validate()?;

    let mut retry_backoff = Constant::new(policy.retry_delay);
    let mut quota_backoff = Constant::new(policy.quota_wait);

    let mut attempts = 0;
    let mut failures = Vec::new();
    let mut last_error = None;

    for model in &policy.models {
        for attempt in 1..=policy.attempts_per_model {
            attempts += 1;
            debug!(model = %model, attempt, "requesting generation");

            let error = match generator.generate(model, prompt, params).await {
                Ok(text) => match extract_json_object(&text) {
                    Ok(object) => {
                        info!(model = %model, attempt, "generation succeeded");
                        return Ok(Generation {
                            object,
                            model: model.clone(),
                            failures,
                        });
                    }
                    Err(source) => {
                        let error = GenerateError::Unparseable {
                            model: model.clone(),
                            source,
                        };
                        if !policy.retry_unparseable {
                            return Err(error);
                        }
                        error
                    }
                },
                Err(e) => GenerateError::Gemini(e),
            };

            let kind = error.kind();
            let delay = if attempt < policy.attempts_per_model {
                match kind {
                    FailureKind::Quota => quota_backoff.next_backoff(),
                    FailureKind::Transient | FailureKind::Unparseable => {
                        retry_backoff.next_backoff()
                    }
                }
            } else {
                None
            };

            warn!(
                model = %model,
                attempt,
                max_attempts = policy.attempts_per_model,
                ?kind,
                delay_secs = delay.map(|d| d.as_secs_f64()),
                "generation attempt failed: {}",
                error
            );

            failures.push(FailedAttempt {
                model: model.clone(),
                attempt,
                kind,
                delay,
            });
            last_error = Some(error);

            if let Some(wait) = delay {
                tokio::time::sleep(wait).await;
            }
        }
    }

    match last_error {
        Some(source) => Err(GenerateError::RetriesExhausted {
            attempts,
            source: Box::new(source),
        }),
        None => Err(ConfigError::NoModels.into()),
    }
}
