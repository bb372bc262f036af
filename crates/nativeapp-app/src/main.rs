mod app_state;
mod cli;

use std::path::Path;
use std::process::ExitCode;

use nativeapp_common::ConfigError;
use nativeapp_config::{LogLevel, NativeAppConfig};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Build the `EnvFilter` directive. A bare level applies to the nativeapp
/// crates; anything containing `=` is taken as a full directive.
fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("nativeapp={level}"),
        None => format!("nativeapp={}", config_level.as_str()),
    }
}

fn load_config(path: Option<&str>) -> Result<NativeAppConfig, ConfigError> {
    match path {
        Some(path) => nativeapp_config::load_config_from(Path::new(path)),
        None => nativeapp_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the default log level, so it loads before logging exists.
    let loaded = load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let directive = log_directive(args.log_level.as_deref(), level)
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("NativeApp v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        NativeAppConfig::default()
    });
    tracing::debug!(config = %nativeapp_config::config_to_json(&config), "Config loaded");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::NativeApp::new(config, args.page);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
