//! Resource hint insertion

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Append `<link rel=preconnect href=... crossorigin>` to the document head
///
/// Hints are add-only; nothing in the library ever removes them.
pub(crate) fn add_preconnect(document: &Document, origin: &str) -> Result<(), JsValue> {
    let link = document.create_element("link")?;
    link.set_attribute("rel", "preconnect")?;
    link.set_attribute("href", origin)?;
    link.set_attribute("crossorigin", "")?;

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&link)?;
    Ok(())
}
