use serde::Serialize;
use serde_json::Value;

use super::query::percent_decode;

/// Parse JSON text, percent-decoding it first.
///
/// Top-level scalars (`"text"`, `42`, `true`, `null`) are accepted.
pub fn decode_json(text: &str) -> Option<Value> {
    let decoded = percent_decode(text)?;
    serde_json::from_str(&decoded).ok()
}

/// Serialize any JSON-representable value to compact text.
///
/// Returns `None` for values serde_json refuses (e.g. maps with non-string
/// keys).
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}
