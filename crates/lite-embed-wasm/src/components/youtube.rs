//! Lite YouTube embed component
//!
//! Binds to `.n-ham-c-lite-yt` placeholders. Requires the `videoid` and
//! `videoparams` attributes; `videoparams` is appended verbatim to the query
//! string of the `youtube-nocookie.com` embed URL.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use lite_embed_core::Provider;

use super::{bind_all, bind_placeholder, EmbedBinding};
use crate::logger::Logger;
use crate::onload::on_load;

/// A deferred YouTube embed behind a clickable placeholder
#[wasm_bindgen]
pub struct LiteYouTubeEmbed {
    inner: Rc<EmbedBinding>,
}

#[wasm_bindgen]
impl LiteYouTubeEmbed {
    /// Bind one placeholder element
    ///
    /// Returns `None` when the element is missing a required attribute or the
    /// `__link` anchor; the failure is logged and the element stays inert.
    pub fn bind(element: HtmlElement) -> Option<LiteYouTubeEmbed> {
        let logger = Self::logger();
        match bind_placeholder(element, Provider::YouTube, &logger) {
            Ok(Some(inner)) => Some(Self { inner }),
            Ok(None) => None,
            Err(err) => {
                logger.error_with("Failed to bind the placeholder element", &err);
                None
            }
        }
    }

    /// Bind every `.n-ham-c-lite-yt` placeholder currently in the document
    ///
    /// Returns the number bound. A placeholder that fails validation is
    /// skipped without affecting its siblings.
    pub fn bind_all() -> Result<u32, JsValue> {
        bind_all(Provider::YouTube, &Self::logger())
    }

    /// Run `bind_all` after the document load event
    ///
    /// Runs immediately when the page has already loaded.
    pub fn boot() -> Result<(), JsValue> {
        on_load(|| {
            if let Err(err) = Self::bind_all() {
                Self::logger().error_with("Failed to bind YouTube placeholders", &err);
            }
        })
    }

    /// Issue preconnect hints for the YouTube origins, once
    pub fn warm_connections(&self) {
        self.inner.warm_connections();
    }

    /// Replace the placeholder anchor with the real player iframe
    pub fn add_iframe(&self) -> Result<(), JsValue> {
        self.inner.add_iframe()
    }

    #[wasm_bindgen(getter)]
    pub fn preconnected(&self) -> bool {
        self.inner.preconnected()
    }

    /// The percent-encoded video identifier
    #[wasm_bindgen(getter)]
    pub fn video_id(&self) -> String {
        self.inner.video_id().to_string()
    }
}

impl LiteYouTubeEmbed {
    fn logger() -> Logger {
        Logger::with_prefix("lite-embed/youtube")
    }
}
