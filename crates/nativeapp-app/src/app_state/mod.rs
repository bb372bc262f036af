//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the webview and the bridge driving it.

mod core;
mod demo_screen;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::NativeApp;
