//! Encoding and decoding of everything that crosses the bridge.
//!
//! The renderer talks back to the host in two shapes:
//! - a URL-style query string (`nativeapp://parameters?a=1&b=2`, or a bare
//!   `a=1&b=2` posted as text), decoded into a [`ParameterMap`];
//! - a Base64 envelope directly after the reserved prefix
//!   (`nativeapp://<base64>`), wrapping either a percent-encoded query string
//!   or percent-encoded JSON.
//!
//! Every function here is pure. Decoding never errors: malformed input yields
//! `None`, and the bridge turns that into a silent drop.
//!
//! Percent-decoding is applied exactly once, inside these functions. Callers
//! must pass text exactly as it came off the wire.

mod envelope;
mod json;
mod query;


use std::collections::HashMap;

use serde_json::Value;

pub use envelope::{
    decode_envelope, decode_json_enveloped, decode_parameters_enveloped, encode_enveloped,
};
pub use json::{decode_json, encode_json};
pub use query::{decode_parameters, encode_parameters, get_parameter};

/// Decoded query parameters: name -> value.
///
/// Items without a value map to the empty string. When a name repeats, the
/// last occurrence wins.
pub type ParameterMap = HashMap<String, String>;

/// A renderer -> host message after decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// A structured JSON value, delivered to `BridgeObserver::on_message`.
    Structured(Value),
    /// A decoded parameter set, delivered to `BridgeObserver::on_parameters`.
    Parameters(ParameterMap),
}
