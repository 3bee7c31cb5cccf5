//! Credential and environment configuration.
//!
//! Lookup order for the API key:
//! 1. GEMINI_API_KEY environment variable
//! 2. GOOGLE_API_KEY environment variable
//!
//! Either may come from a `.env` file in the working directory, loaded by
//! [`load_dotenv`] before lookup. Real environment variables win over the
//! file.

use std::env;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ConfigError;

/// Primary credential variable.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Fallback credential variable shared with other Google tooling.
pub const FALLBACK_API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

/// Default timeout for a single Gemini request (2 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable to override the default timeout.
pub const TIMEOUT_ENV_VAR: &str = "TRAVELBRIEF_TIMEOUT";

/// Load a `.env` file from the working directory if one exists.
///
/// A missing file is normal; anything else is logged and ignored.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Get the Gemini API key from the environment.
pub fn get_api_key() -> Result<String, ConfigError> {
    for var in [API_KEY_ENV_VAR, FALLBACK_API_KEY_ENV_VAR] {
        if let Ok(key) = env::var(var) {
            let key = key.trim();
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
    }

    Err(ConfigError::MissingApiKey)
}

/// Get the configured request timeout.
///
/// Reads from TRAVELBRIEF_TIMEOUT (seconds) if set, otherwise uses the
/// default of 120 seconds. Invalid values log a warning and fall back.
pub fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}
