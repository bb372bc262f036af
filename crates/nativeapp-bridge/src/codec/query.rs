//! Query-string decoding.

use std::borrow::Cow;

use url::{ParseError, Url};

use super::ParameterMap;

/// Base that relative text (`page?a=1`, `a=1&b=2`) is resolved against.
const RELATIVE_BASE: &str = "nativeapp://localhost/";

/// Characters a URL query cannot carry unescaped. A decoded item name holding
/// one of them means the text was never a query string.
const FORBIDDEN_NAME_CHARS: &[char] = &['"', '{', '}', '[', ']', '<', '>'];

/// Decode the parameters carried by `text`.
///
/// `text` is percent-decoded first, then read as a URL query string: the
/// query of a `scheme://` URL, the part after `?` of a relative reference, or
/// the whole text when it is a bare query. A fragment (`#...`) is ignored.
///
/// Returns `None` when percent-decoding fails, when a URL carries no query
/// at all, when `text` is empty, or when an item name could not have come
/// from a query string (JSON text, free prose). A URL with an empty query
/// (`page?`) yields an empty map.
pub fn decode_parameters(text: &str) -> Option<ParameterMap> {
    Some(decode_items(text)?.into_iter().collect())
}

/// Look up a single parameter in `text`.
///
/// Uses the same pipeline as [`decode_parameters`] but returns the value of
/// the first item named `name`.
pub fn get_parameter(name: &str, text: &str) -> Option<String> {
    decode_items(text)?
        .into_iter()
        .find(|(item, _)| item == name)
        .map(|(_, value)| value)
}

fn decode_items(text: &str) -> Option<Vec<(String, String)>> {
    let decoded = percent_decode(text)?;
    let query = query_part(&decoded)?;
    let mut items = Vec::new();
    for (name, value) in query_items(&query) {
        if !is_query_name(name) {
            return None;
        }
        items.push((name.to_string(), value.to_string()));
    }
    Some(items)
}

/// Build a percent-encoded query string (without a leading `?`).
///
/// Keys are sorted so the output is stable.
pub fn encode_parameters(parameters: &ParameterMap) -> String {
    let mut keys: Vec<&String> = parameters.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&parameters[key])
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Strict percent-decoding: every `%` must start a two-digit hex escape and
/// the decoded bytes must be UTF-8.
pub(super) fn percent_decode(text: &str) -> Option<Cow<'_, str>> {
    if !has_valid_escapes(text) {
        return None;
    }
    urlencoding::decode(text).ok()
}

fn has_valid_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// Find the query of already-decoded text.
///
/// Literal `%` is escaped before handing the text to the URL parser and the
/// parser's own escapes are undone afterwards, so wire escapes are still
/// decoded exactly once.
fn query_part(decoded: &str) -> Option<String> {
    if decoded.is_empty() {
        return None;
    }
    let escaped = decoded.replace('%', "%25");
    let query = match Url::parse(&escaped) {
        Ok(url) => url.query()?.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => relative_query(&escaped)?,
        Err(_) => return None,
    };
    urlencoding::decode(&query).ok().map(Cow::into_owned)
}

fn relative_query(escaped: &str) -> Option<String> {
    let base = Url::parse(RELATIVE_BASE).ok()?;
    if let Some(query) = base.join(escaped).ok()?.query() {
        return Some(query.to_string());
    }
    // bare `a=1&b=2`
    let bare = base.join(&format!("?{escaped}")).ok()?;
    bare.query().map(str::to_string)
}

fn is_query_name(name: &str) -> bool {
    !name
        .chars()
        .any(|c| c.is_whitespace() || FORBIDDEN_NAME_CHARS.contains(&c))
}

fn query_items(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|item| !item.is_empty())
        .map(|item| item.split_once('=').unwrap_or((item, "")))
}
