//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod system;
mod webview;
mod window;

pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the demo host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeAppConfig {
    pub window: WindowConfig,
    pub webview: WebViewSettings,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
