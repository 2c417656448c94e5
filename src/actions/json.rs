//! Decoding of JSON-shaped model replies

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Strip a surrounding markdown code fence (```` ```json ```` or ```` ``` ````)
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = match trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    {
        Some(rest) => rest.strip_suffix("```").unwrap_or(rest),
        None => trimmed,
    };
    inner.trim()
}

/// Parse the model's text reply
///
/// Only a syntax error fails. No text, a blank reply, or valid JSON that is
/// not an object all read as `{}`.
pub fn parse_model_json<T: DeserializeOwned>(text: Option<&str>) -> serde_json::Result<T> {
    let clean = strip_code_fences(text.unwrap_or_default());
    let value = match clean {
        "" => Value::Object(Default::default()),
        _ => serde_json::from_str(clean)?,
    };
    let object = match value {
        Value::Object(_) => value,
        _ => Value::Object(Default::default()),
    };
    serde_json::from_value(object)
}
