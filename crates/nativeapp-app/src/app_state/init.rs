//! Window creation and webview setup.

use std::path::PathBuf;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use nativeapp_bridge::{ContentProvider, WebViewManager};
use nativeapp_common::{NativeAppError, Result};

use super::core::NativeApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl NativeApp {
    /// Create the window and the webview manager.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| NativeAppError::Window(e.to_string()))?;

        self.initialize_webviews()?;

        self.window = Some(Arc::new(window));
        tracing::info!("Window created");
        Ok(())
    }

    /// Set up the webview manager with the content provider for `app://`.
    fn initialize_webviews(&mut self) -> Result<()> {
        let content_path = self.content_dir()?;

        if !content_path.is_dir() {
            tracing::warn!(
                path = %content_path.display(),
                "Content directory not found, app:// pages will not resolve"
            );
        }

        let mut manager = WebViewManager::new().with_bridge_options(self.bridge_options());
        manager.set_content_provider(ContentProvider::new(&content_path));

        self.webviews = Some(manager);
        tracing::info!(
            content_dir = %content_path.display(),
            "WebView manager initialized"
        );
        Ok(())
    }

    /// `webview.content_dir`, resolved against the working directory.
    pub(super) fn content_dir(&self) -> Result<PathBuf> {
        let dir = PathBuf::from(&self.config.webview.content_dir);
        if dir.is_absolute() {
            Ok(dir)
        } else {
            Ok(std::env::current_dir()?.join(dir))
        }
    }
}
