//! Page -> host traffic: intercepted navigations and posted messages.
//!
//! Nothing here fails. Anything that does not decode is dropped, logged
//! at `debug`, and the host carries on.

use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::{self, InboundMessage, ParameterMap};
use crate::ipc::PostedMessage;

use super::Bridge;

impl Bridge {
    /// The renderer is about to follow a navigation to `url`.
    ///
    /// Reserved-prefix URLs are decoded and forwarded to the observer. The
    /// navigation itself is never blocked; the bridge is a side channel.
    pub fn on_navigation_intercepted(&mut self, url: &str) {
        if !url.starts_with(&self.options.url_prefix) {
            return;
        }
        match codec::decode_envelope(url, &self.options.url_prefix) {
            Some(InboundMessage::Parameters(parameters)) => self.notify_parameters(parameters),
            Some(InboundMessage::Structured(message)) => self.notify_message(message),
            None => debug!(url_len = url.len(), "reserved URL did not decode, dropped"),
        }
    }

    /// The page posted `payload` on the bridge channel.
    ///
    /// A JSON object goes to `on_message`; a string is decoded as a query
    /// string and goes to `on_parameters`. Anything else is dropped. At most
    /// one observer method runs per message.
    pub fn on_message_posted(&mut self, payload: Value) {
        match payload {
            Value::Object(_) => self.notify_message(payload),
            Value::String(text) => match codec::decode_parameters(&text) {
                Some(parameters) => self.notify_parameters(parameters),
                None => debug!(body_len = text.len(), "posted text did not decode, dropped"),
            },
            other => debug!(kind = value_kind(&other), "posted payload ignored"),
        }
    }

    /// Route a raw IPC body from the webview.
    ///
    /// Frames on other channels, and bodies that are not frames at all,
    /// are ignored.
    pub fn on_ipc_message(&mut self, raw: &str) {
        let Some(frame) = PostedMessage::from_json(raw) else {
            debug!(body_len = raw.len(), "IPC body is not a posted-message frame");
            return;
        };
        if frame.channel != self.options.channel {
            trace!(channel = %frame.channel, "IPC frame on foreign channel");
            return;
        }
        self.on_message_posted(frame.body);
    }

    fn notify_message(&self, message: Value) {
        match self.observer() {
            Some(observer) => observer.on_message(message),
            None => trace!("no observer, message discarded"),
        }
    }

    fn notify_parameters(&self, parameters: ParameterMap) {
        match self.observer() {
            Some(observer) => observer.on_parameters(parameters),
            None => trace!("no observer, parameters discarded"),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
