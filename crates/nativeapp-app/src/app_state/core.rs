//! NativeApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use nativeapp_bridge::{Bridge, BridgeOptions, WebViewHandle, WebViewManager};
use nativeapp_config::NativeAppConfig;

use super::demo_screen::DemoScreen;

/// Top-level application state.
pub struct NativeApp {
    pub(super) config: NativeAppConfig,
    /// Page the webview shows; `--page` overrides the config.
    pub(super) start_page: String,

    // Fields drop in order: bridge, then the webview, then the window.
    pub(super) bridge: Option<Bridge>,
    pub(super) screen: Arc<DemoScreen>,
    pub(super) view: Option<Arc<WebViewHandle>>,
    pub(super) webviews: Option<WebViewManager>,
    pub(super) window: Option<Arc<Window>>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl NativeApp {
    pub fn new(config: NativeAppConfig, page: Option<String>) -> Self {
        let start_page = page.unwrap_or_else(|| config.webview.start_page.clone());
        Self {
            config,
            start_page,
            bridge: None,
            screen: Arc::new(DemoScreen::new()),
            view: None,
            webviews: None,
            window: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Reserved names from the `[bridge]` config section.
    pub(super) fn bridge_options(&self) -> BridgeOptions {
        BridgeOptions {
            url_prefix: self.config.bridge.url_prefix.clone(),
            channel: self.config.bridge.channel.clone(),
        }
    }
}
