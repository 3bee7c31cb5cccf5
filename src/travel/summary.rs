//! Travel summary data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidPurpose;

/// Why the traveller is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Leisure,
    Business,
}

impl Purpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Leisure => "leisure",
            Purpose::Business => "business",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = InvalidPurpose;

    /// Case-insensitive: `Leisure`, `LEISURE` and `leisure` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leisure" => Ok(Purpose::Leisure),
            "business" => Ok(Purpose::Business),
            _ => Err(InvalidPurpose(s.to_string())),
        }
    }
}

/// Structured travel summary as printed on stdout.
///
/// Field order here is the output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSummary {
    pub place: String,
    pub purpose: Purpose,
    pub overview: Vec<String>,
    pub things_to_know: Vec<String>,
    pub nearby_transport: Vec<String>,
    pub how_to_get_there: String,
    pub best_time_to_travel: String,
}

impl TravelSummary {
    /// Pretty-printed JSON with 2-space indentation.
    ///
    /// Non-ASCII characters are written literally, not `\u` escaped.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
