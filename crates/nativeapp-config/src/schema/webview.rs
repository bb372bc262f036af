//! WebView and bridge configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the embedded webview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Page loaded at startup.
    pub start_page: String,
    /// Directory served under `app://localhost/`. Relative paths resolve
    /// against the working directory.
    pub content_dir: String,
    /// Enable dev tools. Always on in debug builds.
    pub devtools: bool,
    /// Custom user agent; the default one is used when absent.
    pub user_agent: Option<String>,
    pub transparent: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            start_page: "app://localhost/demo/index.html".into(),
            content_dir: "assets".into(),
            devtools: false,
            user_agent: None,
            transparent: false,
        }
    }
}

/// Reserved names shared by the host and the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// URL prefix the page navigates to when sending parameters.
    pub url_prefix: String,
    /// Name of the posted-message channel (`window.<channel>.postMessage`).
    pub channel: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            url_prefix: "nativeapp://".into(),
            channel: "nativeapp".into(),
        }
    }
}
