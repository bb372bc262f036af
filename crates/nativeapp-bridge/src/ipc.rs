//! The JavaScript side of the bridge and the wire frames it posts.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls `window.nativeapp.postMessage(body)`,
//!   which posts `{"channel": "nativeapp", "body": body}` through wry's
//!   `window.ipc.postMessage`. The page may also navigate to a
//!   `nativeapp://` URL carrying parameters.
//! - **Rust -> JS**: the host evaluates a function-call expression such as
//!   `initPage(false)` in the page context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of navigations addressed to the bridge.
pub const URL_PREFIX: &str = "nativeapp://";

/// Channel name used by `window.<channel>.postMessage`.
pub const MESSAGE_CHANNEL: &str = "nativeapp";

/// A frame posted by the page through the IPC handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedMessage {
    /// Channel the page posted on.
    pub channel: String,
    /// Whatever the page passed to `postMessage`.
    #[serde(default)]
    pub body: Value,
}

impl PostedMessage {
    /// Parse a frame from the raw IPC body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(channel: impl Into<String>, body: Value) -> Self {
        Self {
            channel: channel.into(),
            body,
        }
    }
}

/// JavaScript injected into every page before its own scripts run.
///
/// Exposes `window.<channel>.postMessage(body)`.
pub fn ipc_init_script(channel: &str) -> String {
    let channel_json = serde_json::to_string(channel).unwrap_or_else(|_| "\"nativeapp\"".into());
    format!(
        r#"
(function() {{
    var channel = {channel_json};
    window[channel] = window[channel] || {{}};
    window[channel].postMessage = function(body) {{
        window.ipc.postMessage(JSON.stringify({{
            channel: channel,
            body: body === undefined ? null : body
        }}));
    }};
}})();
"#
    )
}

/// Build a function-call expression with JSON-encoded arguments.
///
/// `js_function_call("receiveJSON", &[json!({"parameter": "value"})])`
/// yields `receiveJSON({"parameter":"value"})`.
pub fn js_function_call(name: &str, args: &[Value]) -> String {
    let args = args
        .iter()
        .map(|arg| serde_json::to_string(arg).unwrap_or_else(|_| "null".to_string()))
        .collect::<Vec<_>>()
        .join(",");
    format!("{name}({args})")
}
