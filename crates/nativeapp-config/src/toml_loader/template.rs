//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# NativeApp Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "NativeApp"
# width = 900            # 200-7680
# height = 700           # 200-4320

[webview]
# start_page = "app://localhost/demo/index.html"
# content_dir = "assets"  # served under app://localhost/
# devtools = false        # always on in debug builds
# user_agent = "NativeApp/0.1"
# transparent = false

[bridge]
# Must match the names the page uses.
# url_prefix = "nativeapp://"
# channel = "nativeapp"   # window.nativeapp.postMessage(...)

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
