//! wry-backed renderer adapter.
//!
//! `WebViewManager` builds `wry::WebView` instances wired for the bridge:
//! the IPC init script, the page-load / navigation / IPC handlers that feed
//! the event sink, the `app://` content protocol, and a no-content handler
//! for the reserved scheme.

use std::sync::{Arc, Mutex};

use crate::bridge::BridgeOptions;
use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Builds webviews and collects their events.
pub struct WebViewManager {
    /// Event sink; drained by the host event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `app://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
    options: BridgeOptions,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
            options: BridgeOptions::default(),
        }
    }

    /// Use custom reserved names. Must match the `Bridge` driving the views.
    pub fn with_bridge_options(mut self, options: BridgeOptions) -> Self {
        self.options = options;
        self
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Drop a webview and report it closed.
    pub fn destroy(&self, handle: WebViewHandle) {
        let view_id = handle.view_id();
        drop(handle);
        handlers::push_event(&self.events, WebViewEvent::Closed { view_id });
        tracing::debug!(view_id, "WebView destroyed");
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Scheme name of a reserved URL prefix: `nativeapp://` -> `nativeapp`.
pub(crate) fn scheme_name(prefix: &str) -> &str {
    prefix
        .split_once("://")
        .map_or(prefix.trim_end_matches(':'), |(scheme, _)| scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_name_strips_separator() {
        assert_eq!(scheme_name("nativeapp://"), "nativeapp");
        assert_eq!(scheme_name("myapp://"), "myapp");
        assert_eq!(scheme_name("bare:"), "bare");
        assert_eq!(scheme_name("bare"), "bare");
    }

    #[test]
    fn drain_takes_everything_once() {
        let manager = WebViewManager::new();
        handlers::push_event(&manager.events, WebViewEvent::Closed { view_id: 1 });
        handlers::push_event(&manager.events, WebViewEvent::Closed { view_id: 2 });

        let drained = manager.drain_events();
        assert_eq!(
            drained,
            vec![
                WebViewEvent::Closed { view_id: 1 },
                WebViewEvent::Closed { view_id: 2 },
            ]
        );
        assert!(manager.drain_events().is_empty());
    }
}
