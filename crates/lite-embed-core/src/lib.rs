//! Lite Embed Core - lazy-loading video embed library
//!
//! This crate provides the DOM-free logic behind the lite embed components:
//! - Provider constants (CSS contract, embed URLs, preconnect origins)
//! - Embed attribute validation and iframe `src` building
//! - Leveled log formatting with styled prefixes
//!
//! The browser-facing half lives in `lite-embed-wasm`, which binds these
//! decisions to real DOM elements via `wasm-bindgen`.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │               lite-embed-core                 │
//! ├───────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌───────────┐  ┌────────────┐  │
//! │  │ Provider │  │   Embed   │  │ LogFormat  │  │
//! │  │ tables   │  │  Source   │  │  + levels  │  │
//! │  └────┬─────┘  └─────┬─────┘  └─────┬──────┘  │
//! └───────┼──────────────┼──────────────┼─────────┘
//!         │              │              │
//! ┌───────┴──────────────┴──────────────┴─────────┐
//! │    lite-embed-wasm (components, bootstrap,    │
//! │          console logger, onload)              │
//! └───────────────────────────────────────────────┘
//! ```

pub mod embed;
pub mod error;
pub mod logger;
pub mod provider;

pub use embed::{encode_video_id, EmbedSource, ATTR_VIDEO_ID, ATTR_VIDEO_PARAMS, IFRAME_STYLE};
pub use error::{Error, Result};
pub use logger::{LogFormat, LogLevel, Prefix};
pub use provider::Provider;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Lite Embed Core initialized");
}
