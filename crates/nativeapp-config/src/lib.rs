//! NativeApp configuration.
//!
//! TOML-based configuration for the demo host: window, webview, the
//! reserved bridge names and logging. Every section has defaults, so a
//! partial file works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nativeapp_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BridgeConfig, LogLevel, LoggingConfig, NativeAppConfig, WebViewSettings, WindowConfig};

use nativeapp_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<NativeAppConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from `path` and validate it.
pub fn load_config_from(path: &Path) -> Result<NativeAppConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &NativeAppConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
