//! Lite embed placeholder components
//!
//! One binding per placeholder element. A binding starts idle, warms
//! third-party connections on the first pointer-over, and swaps in the real
//! player iframe on click. The transition to activated is one-way; nothing
//! reverts a placeholder.

mod vimeo;
mod youtube;

pub use vimeo::LiteVimeoEmbed;
pub use youtube::LiteYouTubeEmbed;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement};

use lite_embed_core::{
    EmbedSource, Error, Provider, ATTR_VIDEO_ID, ATTR_VIDEO_PARAMS, IFRAME_STYLE,
};

use crate::hints;
use crate::logger::Logger;

/// One bound placeholder: container, anchor, validated source
///
/// The container and anchor are owned by the document; the binding holds
/// references only. `preconnected` flips to true exactly once, on the first
/// warm-up, and never resets.
pub(crate) struct EmbedBinding {
    element: HtmlElement,
    anchor: Element,
    source: EmbedSource,
    preconnected: Cell<bool>,
    logger: Logger,
}

impl EmbedBinding {
    /// Issue preconnect hints for the provider's origins, once
    ///
    /// Repeated calls after the first are no-ops. Hints are appended to the
    /// document head and never removed.
    pub(crate) fn warm_connections(&self) {
        if self.preconnected.get() {
            return;
        }
        self.preconnected.set(true);

        let Some(document) = self.element.owner_document() else {
            return;
        };
        for origin in self.source.provider().preconnect_origins() {
            if let Err(err) = hints::add_preconnect(&document, origin) {
                self.logger.warn_with("Failed to add a preconnect hint", &err);
            }
        }
    }

    /// Replace the anchor with the real player iframe
    ///
    /// Terminal: the anchor is removed from the DOM, so the click listener
    /// can never fire again. Calling this on an already-activated binding
    /// fails, since the anchor is no longer a child of the container.
    pub(crate) fn add_iframe(&self) -> Result<(), JsValue> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("element has no owner document"))?;
        let provider = self.source.provider();

        let iframe = document.create_element("iframe")?;
        iframe.set_attribute("allow", provider.allow_attribute())?;
        iframe.set_attribute("allowfullscreen", "")?;
        iframe.set_attribute("style", IFRAME_STYLE)?;
        iframe.set_attribute("src", &self.source.iframe_src())?;

        self.element.remove_child(&self.anchor)?;
        self.element.append_child(&iframe)?;
        self.element.class_list().add_1(&provider.activated_class())?;
        Ok(())
    }

    pub(crate) fn preconnected(&self) -> bool {
        self.preconnected.get()
    }

    pub(crate) fn video_id(&self) -> &str {
        self.source.video_id()
    }
}

/// Bind one placeholder element for `provider`
///
/// Returns `Ok(None)` when a required attribute or the anchor is missing:
/// the failure is logged as a warning, the element stays inert, and sibling
/// placeholders are unaffected. `Err` is reserved for DOM API failures.
pub(crate) fn bind_placeholder(
    element: HtmlElement,
    provider: Provider,
    logger: &Logger,
) -> Result<Option<Rc<EmbedBinding>>, JsValue> {
    let anchor = match element.query_selector(&provider.anchor_selector())? {
        Some(anchor) => anchor,
        None => {
            let err = Error::MissingAnchor {
                selector: provider.anchor_selector(),
            };
            logger.warn_with(&err.to_string(), element.as_ref());
            return Ok(None);
        }
    };

    let source = match build_source(provider, &element) {
        Ok(source) => source,
        Err(err) => {
            logger.warn_with(&err.to_string(), element.as_ref());
            return Ok(None);
        }
    };

    let binding = Rc::new(EmbedBinding {
        element,
        anchor,
        source,
        preconnected: Cell::new(false),
        logger: logger.clone(),
    });
    register_listeners(&binding)?;
    Ok(Some(binding))
}

/// Bind every matching placeholder currently in the document
///
/// Elements added later are not observed. Returns the number of placeholders
/// that bound successfully.
pub(crate) fn bind_all(provider: Provider, logger: &Logger) -> Result<u32, JsValue> {
    let document = crate::document()?;
    let nodes = document.query_selector_all(&provider.selector())?;

    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        if bind_placeholder(element, provider, logger)?.is_some() {
            bound += 1;
        }
    }
    Ok(bound)
}

fn build_source(provider: Provider, element: &HtmlElement) -> lite_embed_core::Result<EmbedSource> {
    match provider {
        Provider::YouTube => EmbedSource::youtube(
            element.get_attribute(ATTR_VIDEO_ID).as_deref(),
            element.get_attribute(ATTR_VIDEO_PARAMS).as_deref(),
        ),
        Provider::Vimeo => EmbedSource::vimeo(element.get_attribute(ATTR_VIDEO_ID).as_deref()),
    }
}

fn register_listeners(binding: &Rc<EmbedBinding>) -> Result<(), JsValue> {
    // On hover (or tap), warm up the connections we're likely about to use
    let warm = {
        let binding = Rc::clone(binding);
        Closure::<dyn FnMut()>::new(move || binding.warm_connections())
    };
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    binding
        .anchor
        .add_event_listener_with_callback_and_add_event_listener_options(
            "pointerover",
            warm.as_ref().unchecked_ref(),
            &options,
        )?;
    warm.forget();

    // Once the user clicks, swap in the real iframe
    let click = {
        let binding = Rc::clone(binding);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            if let Err(err) = binding.add_iframe() {
                binding.logger.error_with("Failed to activate the embed", &err);
            }
        })
    };
    binding
        .anchor
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();

    Ok(())
}
