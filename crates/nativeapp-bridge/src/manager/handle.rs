use std::sync::{Arc, Mutex};

use nativeapp_common::BridgeError;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use wry::WebView;

use crate::bridge::{EvalResultCallback, RendererAdapter};

/// Handle to a managed WebView instance.
///
/// Implements [`RendererAdapter`], so a `Bridge` can drive it. Keep it in an
/// `Arc` and hand the bridge a reference with `Bridge::new(&handle)`.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    pub(super) view_id: u32,
}

impl WebViewHandle {
    pub fn view_id(&self) -> u32 {
        self.view_id
    }

    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}

impl RendererAdapter for WebViewHandle {
    fn load(&self, target: &str) -> Result<(), BridgeError> {
        self.load_url(target)
            .map_err(|e| BridgeError::Renderer(e.to_string()))
    }

    fn evaluate(&self, script: &str, done: EvalResultCallback) {
        // wry wants a `Fn`; the slot makes sure `done` runs once.
        let slot = Arc::new(Mutex::new(Some(done)));
        let on_result = Arc::clone(&slot);
        let view_id = self.view_id;

        let started = self
            .webview
            .evaluate_script_with_callback(&guarded_script(script), move |raw| {
                let done = on_result.lock().ok().and_then(|mut slot| slot.take());
                if let Some(done) = done {
                    let result = parse_guarded_result(&raw);
                    match &result {
                        Ok(_) => debug!(view_id, result_len = raw.len(), "script evaluated"),
                        Err(e) => debug!(view_id, error = %e, "script failed in page"),
                    }
                    done(result);
                }
            });

        if let Err(e) = started {
            warn!(view_id, error = %e, "failed to evaluate script");
            let done = slot.lock().ok().and_then(|mut slot| slot.take());
            if let Some(done) = done {
                done(Err(BridgeError::Evaluate(e.to_string())));
            }
        }
    }
}

/// Wrap `script` so that an exception comes back as data.
///
/// wry hands the callback an empty or `null` result when the script throws,
/// which is indistinguishable from a call that returned nothing.
fn guarded_script(script: &str) -> String {
    format!(
        "(() => {{ try {{ return {{ ok: true, value: ({script}) }}; }} \
         catch (e) {{ return {{ ok: false, error: String(e) }}; }} }})()"
    )
}

/// What a [`guarded_script`] evaluates to, as wry serializes it.
#[derive(Debug, Deserialize)]
struct GuardedResult {
    ok: bool,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn wry's JSON-serialized result of a [`guarded_script`] into an outcome.
///
/// `undefined` is dropped by the page's JSON serializer, so a missing `value`
/// means the call returned nothing. Anything that is not a guarded result
/// (including an empty string when the wrapped script did not even parse)
/// is an evaluation error.
fn parse_guarded_result(raw: &str) -> Result<Option<Value>, BridgeError> {
    let guarded: GuardedResult = serde_json::from_str(raw.trim())
        .map_err(|_| BridgeError::Evaluate(format!("unexpected script result: {raw:?}")))?;
    if guarded.ok {
        Ok(guarded.value)
    } else {
        Err(BridgeError::Evaluate(
            guarded.error.unwrap_or_else(|| "script error".to_string()),
        ))
    }
}
