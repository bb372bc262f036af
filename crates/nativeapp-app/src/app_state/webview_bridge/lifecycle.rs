//! WebView lifecycle: create, reload, resize, destroy.

use std::sync::Arc;

use nativeapp_bridge::{Bridge, WebViewConfig};
use nativeapp_common::{NativeAppError, Result};

use crate::app_state::core::NativeApp;
use crate::app_state::demo_screen::{log_outcome, DemoScreen};
use crate::app_state::types::DEMO_VIEW_ID;

use super::bounds::window_bounds;

impl NativeApp {
    /// Create the demo webview and its bridge, then queue the startup call.
    ///
    /// The view is created already pointed at the start page, so the bridge
    /// starts out not loaded and the call waits for that page.
    pub(in crate::app_state) fn create_demo_view(&mut self) -> Result<()> {
        let window = self
            .window
            .as_ref()
            .ok_or_else(|| NativeAppError::Window("no window".into()))?;
        let manager = self
            .webviews
            .as_ref()
            .ok_or_else(|| NativeAppError::WebView("manager not initialized".into()))?;

        let size = window.inner_size();
        let bounds = window_bounds(size.width, size.height);
        let options = self.bridge_options();

        let mut config = WebViewConfig::with_url(&self.start_page);
        config.devtools |= self.config.webview.devtools;
        config.transparent = self.config.webview.transparent;
        if let Some(ua) = &self.config.webview.user_agent {
            config.user_agent = Some(ua.clone());
        }

        let handle = manager
            .create(DEMO_VIEW_ID, window.as_ref(), bounds, config)
            .map(Arc::new)
            .map_err(|e| NativeAppError::WebView(e.to_string()))?;
        tracing::info!(view_id = DEMO_VIEW_ID, url = %self.start_page, "WebView created");

        let mut bridge = Bridge::new(&handle)
            .with_options(options)
            .with_observer(&self.screen);
        let startup = DemoScreen::startup_call();
        bridge.invoke(startup.clone(), log_outcome(&startup));

        self.view = Some(handle);
        self.bridge = Some(bridge);
        Ok(())
    }

    /// Load the start page again and repeat the startup call.
    pub(in crate::app_state) fn reload_page(&mut self) {
        let Some(bridge) = self.bridge.as_mut() else {
            return;
        };

        if let Err(e) = bridge.begin_load(&self.start_page) {
            tracing::warn!(url = %self.start_page, error = %e, "Reload failed");
            return;
        }
        tracing::info!(url = %self.start_page, "Reloading page");

        let startup = DemoScreen::startup_call();
        bridge.invoke(startup.clone(), log_outcome(&startup));
    }

    /// Keep the webview covering the window.
    pub(in crate::app_state) fn sync_webview_bounds(&self) {
        let (Some(window), Some(view)) = (&self.window, &self.view) else {
            return;
        };
        let size = window.inner_size();
        if let Err(e) = view.set_bounds(window_bounds(size.width, size.height)) {
            tracing::warn!(view_id = view.view_id(), error = %e, "Failed to update bounds");
        }
    }

    /// Drop the bridge, then the webview.
    ///
    /// Dropping the bridge fails any call still waiting for a page.
    pub(in crate::app_state) fn destroy_demo_view(&mut self) {
        self.bridge = None;

        let Some(view) = self.view.take() else {
            return;
        };
        match (Arc::try_unwrap(view), &self.webviews) {
            (Ok(handle), Some(manager)) => manager.destroy(handle),
            (Ok(handle), None) => drop(handle),
            (Err(_), _) => tracing::warn!("WebView still referenced at shutdown"),
        }
    }
}
