//! Validation for the window and webview sections.

use crate::schema::NativeAppConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NativeAppConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}

pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &NativeAppConfig) {
    validate_non_empty(errors, "webview.start_page", &config.webview.start_page);
    validate_non_empty(errors, "webview.content_dir", &config.webview.content_dir);
    if let Some(ua) = &config.webview.user_agent {
        validate_non_empty(errors, "webview.user_agent", ua);
    }
}
