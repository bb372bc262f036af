//! Routing of drained webview events into the bridge.

use nativeapp_bridge::{Bridge, PageLoadState, WebViewEvent};

use crate::app_state::core::NativeApp;
use crate::app_state::demo_screen::log_outcome;
use crate::app_state::types::DEMO_VIEW_ID;

/// Forward one event to the bridge. Returns the new document title, if
/// the event carried one.
pub(super) fn route_event(bridge: &mut Bridge, event: WebViewEvent) -> Option<String> {
    match event {
        WebViewEvent::PageLoad {
            view_id,
            state: PageLoadState::Finished,
            url,
        } => {
            tracing::debug!(view_id, url = %url, "page finished loading");
            bridge.on_load_finished();
        }
        WebViewEvent::PageLoad { view_id, state, url } => {
            tracing::debug!(view_id, ?state, url = %url, "page load event");
        }
        WebViewEvent::NavigationRequested { url, .. } => {
            bridge.on_navigation_intercepted(&url);
        }
        WebViewEvent::IpcMessage { body, .. } => {
            bridge.on_ipc_message(&body);
        }
        WebViewEvent::TitleChanged { title, .. } => return Some(title),
        WebViewEvent::Closed { view_id } => {
            tracing::debug!(view_id, "WebView closed event");
        }
    }
    None
}

impl NativeApp {
    /// Drain webview events and forward them to the bridge.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };
        let Some(bridge) = self.bridge.as_mut() else {
            return;
        };

        for event in events {
            if event.view_id() != DEMO_VIEW_ID {
                tracing::debug!(view_id = event.view_id(), "event for unknown view dropped");
                continue;
            }
            if let Some(title) = route_event(bridge, event) {
                if let Some(window) = &self.window {
                    window.set_title(&title);
                }
            }
        }
    }

    /// Send the replies the demo screen queued while handling messages.
    pub(in crate::app_state) fn deliver_replies(&mut self) {
        let Some(bridge) = self.bridge.as_mut() else {
            return;
        };
        for reply in self.screen.take_replies() {
            bridge.invoke(reply.clone(), log_outcome(&reply));
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
