//! Glue between the window, the webview and its bridge.
//!
//! Handles webview bounds, creating and reloading the view, and routing
//! drained webview events into the bridge.

mod bounds;
mod lifecycle;
mod routing;
