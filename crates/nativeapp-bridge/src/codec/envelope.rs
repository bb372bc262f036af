//! Base64 envelopes: `<prefix><base64 of percent-encoded payload>`.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde_json::Value;

use super::json::decode_json;
use super::query::decode_parameters;
use super::{InboundMessage, ParameterMap};

/// Decode parameters wrapped in a Base64 envelope.
///
/// `text` must start with `prefix`; the remainder is Base64-decoded, read as
/// UTF-8 and handed to [`decode_parameters`]. Any failing stage yields `None`.
pub fn decode_parameters_enveloped(text: &str, prefix: &str) -> Option<ParameterMap> {
    let inner = open(text, prefix)?;
    decode_parameters(&inner)
}

/// Decode JSON wrapped in a Base64 envelope.
pub fn decode_json_enveloped(text: &str, prefix: &str) -> Option<Value> {
    let inner = open(text, prefix)?;
    decode_json(&inner)
}

/// Wrap `inner` the way the page does: `prefix + base64(encodeURIComponent(inner))`.
pub fn encode_enveloped(inner: &str, prefix: &str) -> String {
    let escaped = urlencoding::encode(inner);
    format!("{prefix}{}", B64.encode(escaped.as_bytes()))
}

/// Decode a reserved-scheme URL in whichever shape it arrives.
///
/// Tried in order:
/// 1. a plain query string (`nativeapp://path?a=1`);
/// 2. an envelope holding a JSON object or array;
/// 3. an envelope holding a query string.
///
/// JSON goes before the enveloped query because decoded JSON text may itself
/// contain a `?` and would otherwise parse as a bogus query.
pub fn decode_envelope(text: &str, prefix: &str) -> Option<InboundMessage> {
    if let Some(parameters) = decode_parameters(text) {
        return Some(InboundMessage::Parameters(parameters));
    }
    let inner = open(text, prefix)?;
    match decode_json(&inner) {
        Some(value @ (Value::Object(_) | Value::Array(_))) => {
            Some(InboundMessage::Structured(value))
        }
        _ => decode_parameters(&inner).map(InboundMessage::Parameters),
    }
}

fn open(text: &str, prefix: &str) -> Option<String> {
    let payload = text.strip_prefix(prefix)?;
    let bytes = B64.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}
