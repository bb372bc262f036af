//! Local content serving via custom protocol.
//!
//! Registers an `app://` custom protocol so the webview can load the bundled
//! demo page without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use nativeapp_common::CONTENT_SCHEME;

/// Serves local files from a base directory via custom protocol.
///
/// A request for `app://localhost/demo/index.html` resolves to
/// `{base_dir}/demo/index.html`.
pub struct ContentProvider {
    base_dir: PathBuf,
    /// In-memory assets, checked before the filesystem.
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and content bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape base_dir.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Strip the scheme and host from an `app://` request URI.
///
/// WebView2 rewrites custom schemes to `http://app.localhost/...`, so that
/// form is accepted too. Query strings and fragments are dropped.
pub fn request_path(uri: &str) -> &str {
    let path = uri
        .strip_prefix("app://localhost/")
        .or_else(|| uri.strip_prefix("app://localhost"))
        .or_else(|| uri.strip_prefix("http://app.localhost/"))
        .or_else(|| uri.strip_prefix("app:///"))
        .or_else(|| uri.strip_prefix("app://"))
        .unwrap_or("");
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    &path[..end]
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
