//! The demo screen: what the host does with messages from the sample page.

use std::sync::Mutex;

use nativeapp_bridge::ipc::js_function_call;
use nativeapp_bridge::{BridgeObserver, CallOutcome, ParameterMap};
use serde_json::{json, Value};

/// Observer for the sample page.
///
/// Replies cannot be sent from inside an observer callback (the bridge is
/// borrowed), so they are queued here and sent by the event loop.
#[derive(Default)]
pub(super) struct DemoScreen {
    replies: Mutex<Vec<String>>,
}

impl DemoScreen {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Call made once the page is up.
    pub(super) fn startup_call() -> String {
        js_function_call("initPage", &[json!(false)])
    }

    /// Take the replies queued since the last call.
    pub(super) fn take_replies(&self) -> Vec<String> {
        match self.replies.lock() {
            Ok(mut replies) => std::mem::take(&mut *replies),
            Err(_) => Vec::new(),
        }
    }

    fn queue_reply(&self, invocation: String) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push(invocation);
        }
    }
}

impl BridgeObserver for DemoScreen {
    fn on_message(&self, message: Value) {
        tracing::info!(message = %message, "message from page");
        if message.get("parameter1").is_some() {
            self.queue_reply(js_function_call(
                "receiveJSON",
                &[json!({"parameter": "value"})],
            ));
        }
    }

    fn on_parameters(&self, parameters: ParameterMap) {
        let mut names: Vec<_> = parameters.keys().collect();
        names.sort();
        for name in names {
            tracing::info!(name = %name, value = %parameters[name], "parameter from page");
        }
    }
}

/// Completion callback that logs the outcome of `invocation`.
pub(super) fn log_outcome(invocation: &str) -> impl FnOnce(CallOutcome) + Send + 'static {
    let invocation = invocation.to_string();
    move |outcome| match outcome {
        CallOutcome::Success(Some(value)) => {
            tracing::info!(invocation = %invocation, result = %value, "page call returned")
        }
        CallOutcome::Success(None) => {
            tracing::info!(invocation = %invocation, "page call returned nothing")
        }
        CallOutcome::Failure => tracing::warn!(invocation = %invocation, "page call failed"),
    }
}
