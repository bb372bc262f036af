//! Bridge core: readiness gating, the pending-call queue, and routing of
//! page -> host messages to the observer.
//!
//! A `Bridge` is single-threaded. Every method takes `&mut self` and must be
//! called from the thread that owns the webview (the host event loop). wry
//! handlers never touch the bridge directly; they push `WebViewEvent`s that
//! the loop drains and forwards here, so a flush can never interleave with
//! a new enqueue.

mod adapter;
mod inbound;
mod types;

#[cfg(test)]
mod tests;

use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use nativeapp_common::BridgeError;
use tokio::sync::oneshot;
use tracing::{debug, warn};

pub use adapter::{BridgeObserver, RendererAdapter};
pub use types::{
    BridgeOptions, CallOutcome, EvalCallback, EvalResultCallback, PendingCall, ReadinessState,
};

/// Host side of the bridge for one webview.
pub struct Bridge {
    options: BridgeOptions,
    state: ReadinessState,
    pending: VecDeque<PendingCall>,
    renderer: Weak<dyn RendererAdapter>,
    observer: Option<Weak<dyn BridgeObserver>>,
}

impl Bridge {
    /// Create a bridge driving `renderer`. The bridge does not keep the
    /// renderer alive.
    pub fn new<R: RendererAdapter + 'static>(renderer: &Arc<R>) -> Self {
        let renderer = Arc::downgrade(renderer) as Weak<dyn RendererAdapter>;
        Self {
            options: BridgeOptions::default(),
            state: ReadinessState::NotLoaded,
            pending: VecDeque::new(),
            renderer,
            observer: None,
        }
    }

    /// Replace the reserved prefix / channel names.
    pub fn with_options(mut self, options: BridgeOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach the observer. Only a weak reference is kept.
    pub fn with_observer<O: BridgeObserver + 'static>(mut self, observer: &Arc<O>) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer<O: BridgeObserver + 'static>(&mut self, observer: &Arc<O>) {
        let observer = Arc::downgrade(observer) as Weak<dyn BridgeObserver>;
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn state(&self) -> ReadinessState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ReadinessState::Loaded
    }

    /// Number of calls waiting for the document to finish loading.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Start loading `target`. Calls made from now on wait for
    /// [`Bridge::on_load_finished`].
    ///
    /// Calls already queued stay queued; they run on the next readiness
    /// transition along with any new ones.
    pub fn begin_load(&mut self, target: &str) -> Result<(), BridgeError> {
        self.state = ReadinessState::NotLoaded;
        let renderer = self.renderer.upgrade().ok_or(BridgeError::RendererGone)?;
        debug!(url = target, pending = self.pending.len(), "begin load");
        renderer.load(target)
    }

    /// Evaluate `invocation` (a function-call expression such as
    /// `initPage(false)`) in the page.
    ///
    /// Runs immediately when the document is loaded; otherwise the call is
    /// queued. Never blocks. `callback` receives exactly one outcome.
    pub fn invoke<F>(&mut self, invocation: impl Into<String>, callback: F)
    where
        F: FnOnce(CallOutcome) + Send + 'static,
    {
        let call = PendingCall::new(invocation.into(), Box::new(callback));
        match self.state {
            ReadinessState::Loaded => dispatch(&self.renderer, call),
            ReadinessState::NotLoaded => {
                debug!(
                    invocation = %call.invocation,
                    pending = self.pending.len() + 1,
                    "document not ready, call queued"
                );
                self.pending.push_back(call);
            }
        }
    }

    /// Like [`Bridge::invoke`], but the outcome arrives on a oneshot channel.
    ///
    /// The receiver errors only if the callback was dropped without running,
    /// which the bridge never does.
    pub fn invoke_with_reply(
        &mut self,
        invocation: impl Into<String>,
    ) -> oneshot::Receiver<CallOutcome> {
        let (tx, rx) = oneshot::channel();
        self.invoke(invocation, move |outcome| {
            let _ = tx.send(outcome);
        });
        rx
    }

    /// The renderer finished loading the current document.
    ///
    /// Marks the bridge ready and dispatches every queued call in the order
    /// it was made. Dispatch does not wait for completions.
    pub fn on_load_finished(&mut self) {
        self.state = ReadinessState::Loaded;
        if self.pending.is_empty() {
            return;
        }
        debug!(pending = self.pending.len(), "document ready, flushing queued calls");
        for call in self.pending.drain(..) {
            dispatch(&self.renderer, call);
        }
    }

    fn observer(&self) -> Option<Arc<dyn BridgeObserver>> {
        self.observer.as_ref().and_then(Weak::upgrade)
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            warn!(
                pending = self.pending.len(),
                "bridge dropped before document loaded, failing queued calls"
            );
        }
        for call in self.pending.drain(..) {
            (call.callback)(CallOutcome::Failure);
        }
    }
}

fn dispatch(renderer: &Weak<dyn RendererAdapter>, call: PendingCall) {
    let PendingCall {
        invocation,
        callback,
    } = call;
    match renderer.upgrade() {
        Some(renderer) => {
            renderer.evaluate(
                &invocation,
                Box::new(move |result| callback(CallOutcome::from(result))),
            );
        }
        None => {
            warn!(invocation = %invocation, "renderer gone, call failed");
            callback(CallOutcome::Failure);
        }
    }
}
