use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors reported by the renderer side of the bridge.
///
/// Inbound decode problems never surface as errors; they are dropped
/// inside the bridge. These variants only describe failures of the
/// renderer itself (loading a document, evaluating script).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("renderer is no longer available")]
    RendererGone,

    #[error("script evaluation failed: {0}")]
    Evaluate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NativeAppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),
}
