//! Recovery of a JSON array from free-form completion text.

use serde_json::Value;

/// Extract the JSON array carried by a completion.
///
/// The whole text is tried first. Failing that, the span from the first `[`
/// to the last `]` is parsed, which tolerates prose, code fences and
/// trailing commentary around the payload. Valid JSON that is not an array
/// counts as a failure.
#[must_use]
pub fn extract_json_array(text: &str) -> Option<Vec<Value>> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text.trim()) {
        return Some(items);
    }

    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}
