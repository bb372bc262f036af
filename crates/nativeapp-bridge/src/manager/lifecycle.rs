use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{ContentProvider, CONTENT_SCHEME};
use crate::ipc::ipc_init_script;

use super::handle::WebViewHandle;
use super::handlers;
use super::types::WebViewConfig;
use super::{scheme_name, WebViewManager};

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window. The
    /// returned handle is what a `Bridge` drives; wrap it in an `Arc`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_initialization_script(&ipc_init_script(&self.options.channel));

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), view_id);
        builder = self.attach_custom_protocols(builder);

        builder = match &config.url {
            Some(url) => builder.with_url(url),
            None => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder.build_as_child(window)?;

        let url = config.url.as_deref().unwrap_or("about:blank");
        debug!(view_id, url, "WebView created");

        Ok(WebViewHandle { webview, view_id })
    }

    /// Set the content provider for serving bundled assets via `app://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocols<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(CONTENT_SCHEME.to_string(), move |_id, request| {
                handlers::content_response(&cp, &request.uri().to_string())
            });
        }

        // Reserved-scheme navigations are still allowed, so something has to
        // answer them or the page would be replaced by an error page.
        let reserved = scheme_name(&self.options.url_prefix).to_string();
        if !reserved.eq_ignore_ascii_case(CONTENT_SCHEME) {
            builder = builder.with_custom_protocol(reserved, |_id, _request| {
                handlers::no_content_response()
            });
        }
        builder
    }
}
