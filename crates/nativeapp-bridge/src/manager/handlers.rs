use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{Response, StatusCode};
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider};
use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

pub(crate) type ProtocolResponse = Response<Cow<'static, [u8]>>;

pub(crate) fn push_event(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    match events.lock() {
        Ok(mut evts) => evts.push(event),
        Err(_) => warn!(view_id = event.view_id(), "event sink poisoned, event dropped"),
    }
}

/// Build an IPC event, or `None` when the body is not JSON.
pub(crate) fn ipc_event(view_id: u32, body: String) -> Option<WebViewEvent> {
    if serde_json::from_str::<serde_json::Value>(&body).is_err() {
        warn!(view_id, body_len = body.len(), "IPC message rejected: invalid JSON");
        return None;
    }
    debug!(view_id, body_len = body.len(), "IPC message from JS");
    Some(WebViewEvent::IpcMessage { view_id, body })
}

/// Record a navigation and let it proceed. The bridge only observes.
pub(crate) fn on_navigation(
    events: &Mutex<Vec<WebViewEvent>>,
    view_id: u32,
    url: String,
) -> bool {
    debug!(view_id, url = %url, "navigation requested");
    push_event(events, WebViewEvent::NavigationRequested { view_id, url });
    true
}

// =============================================================================
// PROTOCOL RESPONSES
// =============================================================================

fn response(status: StatusCode, body: Cow<'static, [u8]>) -> ProtocolResponse {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
}

/// Serve an `app://` request from the content provider.
pub(crate) fn content_response(provider: &ContentProvider, uri: &str) -> ProtocolResponse {
    let path = request_path(uri);
    match provider.resolve(path) {
        Some((mime, data)) => {
            let mut resp = response(StatusCode::OK, Cow::Owned(data.into_owned()));
            if let Ok(value) = HeaderValue::from_str(&mime) {
                resp.headers_mut().insert(CONTENT_TYPE, value);
            }
            resp.headers_mut().insert(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("app://localhost"),
            );
            resp
        }
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            response(StatusCode::NOT_FOUND, Cow::Borrowed(b"Not Found"))
        }
    }
}

/// Answer a reserved-scheme request without replacing the page.
pub(crate) fn no_content_response() -> ProtocolResponse {
    response(StatusCode::NO_CONTENT, Cow::Borrowed(&[]))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            if let Some(event) = ipc_event(view_id, request.body().to_string()) {
                push_event(&events, event);
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id, ?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { view_id, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(view_id, title = %title, "title changed");
            push_event(&events, WebViewEvent::TitleChanged { view_id, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| on_navigation(&events, view_id, url))
    }
}

// =============================================================================
// TESTS
// =============================================================================
