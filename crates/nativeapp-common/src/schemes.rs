//! URL schemes shared by the bridge and its configuration.

/// Scheme the bundled content is served under. The reserved bridge prefix
/// must not reuse it.
pub const CONTENT_SCHEME: &str = "app";
