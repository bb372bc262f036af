//! Graceful shutdown: drop the bridge, destroy the webview.

use super::core::NativeApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl NativeApp {
    /// Perform graceful shutdown.
    ///
    /// Order matters:
    /// 1. Drop the bridge (fails calls still waiting for a page)
    /// 2. Destroy the webview
    /// 3. Drop the manager and any events it still holds
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.destroy_demo_view();

        if let Some(manager) = self.webviews.take() {
            let leftover = manager.drain_events().len();
            if leftover > 0 {
                tracing::debug!(leftover, "Discarding undelivered webview events");
            }
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
