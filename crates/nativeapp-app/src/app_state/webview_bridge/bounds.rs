//! Webview bounds within the host window.

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Bounds covering the whole window's inner area (physical pixels).
pub(super) fn window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
