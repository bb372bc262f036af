use nativeapp_common::BridgeError;
use serde_json::Value;

use crate::ipc::{MESSAGE_CHANNEL, URL_PREFIX};

/// Result of evaluating one function call in the page.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// Evaluation succeeded. The page may or may not have returned a value.
    Success(Option<Value>),
    /// The renderer reported an error, or was gone.
    Failure,
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The returned value, if the call succeeded with one.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => value.as_ref(),
            Self::Failure => None,
        }
    }
}

impl From<Result<Option<Value>, BridgeError>> for CallOutcome {
    fn from(result: Result<Option<Value>, BridgeError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(_) => Self::Failure,
        }
    }
}

/// Receives the outcome of one `Bridge::invoke`.
pub type EvalCallback = Box<dyn FnOnce(CallOutcome) + Send + 'static>;

/// Receives the raw result of one `RendererAdapter::evaluate`.
pub type EvalResultCallback = Box<dyn FnOnce(Result<Option<Value>, BridgeError>) + Send + 'static>;

/// Whether the current document is ready to evaluate script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadinessState {
    #[default]
    NotLoaded,
    Loaded,
}

/// A call made before the document was ready.
pub struct PendingCall {
    pub(super) invocation: String,
    pub(super) callback: EvalCallback,
}

impl PendingCall {
    pub(super) fn new(invocation: String, callback: EvalCallback) -> Self {
        Self {
            invocation,
            callback,
        }
    }
}

impl std::fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingCall")
            .field("invocation", &self.invocation)
            .finish_non_exhaustive()
    }
}

/// Names the bridge reserves on the page side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Navigations starting with this prefix are read as bridge messages.
    pub url_prefix: String,
    /// Only posted frames on this channel reach the bridge.
    pub channel: String,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            url_prefix: URL_PREFIX.to_string(),
            channel: MESSAGE_CHANNEL.to_string(),
        }
    }
}
