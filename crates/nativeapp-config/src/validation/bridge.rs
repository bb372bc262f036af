//! Validation for the reserved bridge names.

use nativeapp_common::CONTENT_SCHEME;

use crate::schema::NativeAppConfig;

pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &NativeAppConfig) {
    let prefix = &config.bridge.url_prefix;
    match prefix.strip_suffix("://") {
        Some(scheme) if is_scheme(scheme) => {
            if scheme.eq_ignore_ascii_case(CONTENT_SCHEME) {
                errors.push(format!(
                    "bridge.url_prefix = \"{prefix}\" clashes with the content scheme"
                ));
            }
        }
        _ => errors.push(format!(
            "bridge.url_prefix = \"{prefix}\" must be a scheme followed by \"://\""
        )),
    }

    let channel = &config.bridge.channel;
    if !is_identifier(channel) {
        errors.push(format!(
            "bridge.channel = \"{channel}\" must be a JavaScript identifier"
        ));
    }
}

/// RFC 3986 scheme: a letter, then letters, digits, `+`, `-` or `.`.
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// ASCII JavaScript identifier (`window.<channel>` must be reachable).
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
