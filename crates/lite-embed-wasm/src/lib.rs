//! Lite Embed WASM - browser bindings for lazy video embeds
//!
//! Provides the DOM-facing half of the lite embed library:
//! - `LiteYouTubeEmbed` / `LiteVimeoEmbed` placeholder components
//! - Page bootstrap (preload promotion, deferred `data-src` activation)
//! - Leveled console logger with styled prefixes
//!
//! ## Integration
//!
//! ```javascript
//! import init, { LiteYouTubeEmbed, LiteVimeoEmbed, schedule_page_bootstrap }
//!   from '@gauntface/lite-embed';
//!
//! await init();
//! schedule_page_bootstrap();
//! LiteYouTubeEmbed.boot();
//! LiteVimeoEmbed.boot();
//! ```

use wasm_bindgen::prelude::*;

pub mod bootstrap;
mod components;
mod hints;
pub mod logger;
pub mod onload;

pub use components::{LiteVimeoEmbed, LiteYouTubeEmbed};
pub use logger::Logger;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

pub(crate) fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}
