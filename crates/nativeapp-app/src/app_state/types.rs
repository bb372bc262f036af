//! Shared constants for the app state.

use std::time::Duration;

/// How often webview events are drained when the loop is otherwise idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Id of the single demo webview.
pub(super) const DEMO_VIEW_ID: u32 = 1;
