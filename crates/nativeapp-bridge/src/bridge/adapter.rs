use nativeapp_common::BridgeError;
use serde_json::Value;

use crate::codec::ParameterMap;

use super::types::EvalResultCallback;

/// The script engine the bridge drives.
///
/// Implemented by `WebViewHandle` for wry, and by in-memory fakes in tests.
pub trait RendererAdapter {
    /// Start loading a new document.
    fn load(&self, target: &str) -> Result<(), BridgeError>;

    /// Evaluate `script` and report the result through `done`, exactly once.
    ///
    /// `Ok(None)` means the script ran but produced no value.
    fn evaluate(&self, script: &str, done: EvalResultCallback);
}

/// Receives what the page sends to the host.
///
/// Both methods take `&self`; implementations that need to mutate state do
/// so through interior mutability. They are called while the bridge is
/// borrowed, so they must not call back into it.
pub trait BridgeObserver {
    /// A structured value posted on the bridge channel.
    fn on_message(&self, message: Value);

    /// A parameter set decoded from a reserved URL or a posted string.
    fn on_parameters(&self, parameters: ParameterMap);
}
