//! Whitespace cleanup for list fields in model output.

use serde_json::{Map, Value};

/// List-valued fields whose string entries get trimmed.
pub const LIST_FIELDS: [&str; 3] = ["overview", "things_to_know", "nearby_transport"];

/// Trim leading and trailing whitespace from string entries of the known
/// list fields, in place. Missing fields, non-list values and non-string
/// entries are left alone.
pub fn normalize(object: &mut Map<String, Value>) {
    for field in LIST_FIELDS {
        let Some(Value::Array(items)) = object.get_mut(field) else {
            continue;
        };

        for item in items.iter_mut() {
            if let Value::String(s) = item {
                *s = s.trim().to_string();
            }
        }
    }
}
