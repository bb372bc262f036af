//! Message bridge between a host application and an embedded webview.
//!
//! - `codec`: query-string, Base64 envelope and JSON decoding
//! - `bridge`: readiness gating, pending-call queue, call/result correlation
//! - `ipc`: the JS side of the bridge (init script, posted-message frames)
//! - `manager`: `wry`-backed renderer adapter and event sink
//! - `content`: bundled asset serving via the `app://` custom protocol

pub mod bridge;
pub mod codec;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use bridge::{
    Bridge, BridgeObserver, BridgeOptions, CallOutcome, ReadinessState, RendererAdapter,
};
pub use codec::{InboundMessage, ParameterMap};
pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{PostedMessage, MESSAGE_CHANNEL, URL_PREFIX};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
