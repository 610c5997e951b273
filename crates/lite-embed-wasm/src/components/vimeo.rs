//! Lite Vimeo embed component
//!
//! Binds to `.n-ham-c-lite-vi` placeholders. Requires the `videoid`
//! attribute; the `player.vimeo.com` embed URL carries a fixed query
//! (white controls, no title/byline/portrait, autoplay).

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use lite_embed_core::Provider;

use super::{bind_all, bind_placeholder, EmbedBinding};
use crate::logger::Logger;
use crate::onload::on_load;

/// A deferred Vimeo embed behind a clickable placeholder
#[wasm_bindgen]
pub struct LiteVimeoEmbed {
    inner: Rc<EmbedBinding>,
}

#[wasm_bindgen]
impl LiteVimeoEmbed {
    /// Bind one placeholder element
    ///
    /// Returns `None` when the element is missing the `videoid` attribute or
    /// the `__link` anchor; the failure is logged and the element stays inert.
    pub fn bind(element: HtmlElement) -> Option<LiteVimeoEmbed> {
        let logger = Self::logger();
        match bind_placeholder(element, Provider::Vimeo, &logger) {
            Ok(Some(inner)) => Some(Self { inner }),
            Ok(None) => None,
            Err(err) => {
                logger.error_with("Failed to bind the placeholder element", &err);
                None
            }
        }
    }

    /// Bind every `.n-ham-c-lite-vi` placeholder currently in the document
    pub fn bind_all() -> Result<u32, JsValue> {
        bind_all(Provider::Vimeo, &Self::logger())
    }

    /// Run `bind_all` after the document load event
    pub fn boot() -> Result<(), JsValue> {
        on_load(|| {
            if let Err(err) = Self::bind_all() {
                Self::logger().error_with("Failed to bind Vimeo placeholders", &err);
            }
        })
    }

    /// Issue preconnect hints for the Vimeo origins, once
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

impl LiteVimeoEmbed {
    fn logger() -> Logger {
        Logger::with_prefix("lite-embed/vimeo")
    }
}
