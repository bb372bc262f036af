//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-4320).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "NativeApp".into(),
            width: 900,
            height: 700,
        }
    }
}
