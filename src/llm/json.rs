//! JSON object extraction for LLM responses.
//!
//! Models often return JSON wrapped in markdown code fences or surrounded
//! by conversational text. The extractor strips fences, scans for
//! top-level objects with brace matching that respects string literals,
//! and insists on exactly one candidate.

use serde_json::{Map, Value};

use crate::error::ExtractError;

/// Extract the single JSON object contained in a model response.
///
/// Fails with [`ExtractError::NoJsonObject`] when no balanced object is
/// present, [`ExtractError::MultipleCandidates`] when more than one
/// top-level object appears, and [`ExtractError::InvalidJson`] when the
/// object does not parse.
pub fn extract_json_object(response: &str) -> Result<Map<String, Value>, ExtractError> {
    let body = strip_fences(response);

    let candidates = find_object_candidates(body);
    let candidate = match candidates.as_slice() {
        [] => return Err(ExtractError::NoJsonObject),
        [only] => *only,
        many => {
            return Err(ExtractError::MultipleCandidates { count: many.len() });
        }
    };

    serde_json::from_str::<Map<String, Value>>(candidate).map_err(ExtractError::InvalidJson)
}

/// Remove a leading ```` ```json ```` / ```` ``` ```` marker and a trailing
/// ```` ``` ```` marker, if present.
pub fn strip_fences(response: &str) -> &str {
    let mut body = response.trim();

    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }

    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }

    body.trim()
}

/// Collect every top-level `{ ... }` span in `text`.
///
/// Tracks brace depth while respecting JSON string literals (including
/// escaped characters), so `{"msg": "use { and } carefully"}` is one
/// candidate. Quotes are only tracked inside an object, so apostrophes
/// or stray quotes in surrounding prose do not flip the string state.
/// An unterminated object at the end of the text is not a candidate.
fn find_object_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (idx, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' if depth > 0 => in_string = !in_string,
            '{' if !in_string => {
                if depth == 0 {
                    start = idx;
                }
                depth += 1;
            }
            '}' if !in_string && depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    candidates.push(&text[start..=idx]);
                }
            }
            _ => {}
        }
    }

    candidates
}
