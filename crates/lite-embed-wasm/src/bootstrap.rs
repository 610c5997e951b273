//! Page bootstrap: preload promotion and deferred-source activation
//!
//! The promoter converts passively-preloaded resources into active ones after
//! the page has rendered: preload-hinted stylesheets and scripts become live
//! tags, and elements whose real URL was parked in `data-src` (to keep the
//! browser's native preloader from fetching it eagerly) get their `src` set.
//!
//! `run_page_bootstrap` is not idempotent - a second pass would duplicate the
//! promoted stylesheet links - so it must run once per page. Use
//! `schedule_page_bootstrap` to tie that single run to the load event.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlLinkElement};

use crate::onload::on_load;

/// Class added to `<body>` once the bootstrap has run
pub const JS_LOADED_CLASS: &str = "u-js-loaded";

/// Copy `data-src` into `src` for every element carrying it
///
/// Setting `src` triggers the browser's normal fetch for the element.
#[wasm_bindgen]
pub fn activate_deferred_sources() -> Result<(), JsValue> {
    let document = crate::document()?;
    let nodes = document.query_selector_all("[data-src]")?;

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        if let Some(src) = element.get_attribute("data-src") {
            if !src.is_empty() {
                element.set_attribute("src", &src)?;
            }
        }
    }
    Ok(())
}

/// Promote every `<link rel=preload as=style>` to an active stylesheet
///
/// Appends an equivalent `rel=stylesheet` link to the head for each preload
/// hint, preserving any `media` attribute. The preload links themselves are
/// left in place.
#[wasm_bindgen]
pub fn promote_preload_styles() -> Result<(), JsValue> {
    let document = crate::document()?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let nodes = document.query_selector_all(r#"link[rel="preload"][as="style"]"#)?;

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(preload) = node.dyn_into::<HtmlLinkElement>() else {
            continue;
        };

        let stylesheet = document.create_element("link")?;
        stylesheet.set_attribute("rel", "stylesheet")?;
        stylesheet.set_attribute("href", &preload.href())?;
        if let Some(media) = preload.get_attribute("media") {
            stylesheet.set_attribute("media", &media)?;
        }
        head.append_child(&stylesheet)?;
    }
    Ok(())
}

/// Promote every `<link rel=preload as=script>` to an active script tag
#[wasm_bindgen]
pub fn promote_preload_scripts() -> Result<(), JsValue> {
    let document = crate::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    let nodes = document.query_selector_all(r#"link[rel="preload"][as="script"]"#)?;

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(preload) = node.dyn_into::<HtmlLinkElement>() else {
            continue;
        };

        let script = document.create_element("script")?;
        script.set_attribute("src", &preload.href())?;
        body.append_child(&script)?;
    }
    Ok(())
}

/// Add the `u-js-loaded` class to `<body>`
///
/// Stylesheets key off this class for enhancements that only make sense once
/// scripting is known to be active.
#[wasm_bindgen]
pub fn add_js_loaded_signal() -> Result<(), JsValue> {
    let document = crate::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    body.class_list().add_1(JS_LOADED_CLASS)?;
    Ok(())
}

/// One full bootstrap pass
///
/// Deferred sources first, then stylesheet and script promotion, then the
/// js-loaded signal. Callers must guarantee a single invocation per page.
#[wasm_bindgen]
pub fn run_page_bootstrap() -> Result<(), JsValue> {
    activate_deferred_sources()?;
    promote_preload_styles()?;
    promote_preload_scripts()?;
    add_js_loaded_signal()
}

/// Run the bootstrap once, after the document load event
#[wasm_bindgen]
pub fn schedule_page_bootstrap() -> Result<(), JsValue> {
    on_load(|| {
        if let Err(err) = run_page_bootstrap() {
            web_sys::console::error_2(&JsValue::from_str("Page bootstrap failed"), &err);
        }
    })
}
