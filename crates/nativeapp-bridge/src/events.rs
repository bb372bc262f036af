//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
///
/// wry invokes its handlers on the UI thread; they only push into the
/// manager's event sink. The host loop drains the sink and forwards each
/// event to the view's `Bridge` from that same thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view_id: u32, title: String },
    /// A frame was posted through `window.ipc`. `body` is valid JSON.
    IpcMessage { view_id: u32, body: String },
    /// A navigation is about to happen. It is always allowed.
    NavigationRequested { view_id: u32, url: String },
    /// WebView was closed / destroyed.
    Closed { view_id: u32 },
}

impl WebViewEvent {
    /// The view this event came from.
    pub fn view_id(&self) -> u32 {
        match self {
            Self::PageLoad { view_id, .. }
            | Self::TitleChanged { view_id, .. }
            | Self::IpcMessage { view_id, .. }
            | Self::NavigationRequested { view_id, .. }
            | Self::Closed { view_id } => *view_id,
        }
    }
}
