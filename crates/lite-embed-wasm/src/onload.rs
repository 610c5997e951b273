//! Run a callback once the document has fully loaded

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Invoke `f` after the document `load` event
///
/// When the module is inserted late the `load` event has already fired and a
/// listener would never trigger, so `f` runs immediately once `readyState`
/// reports `complete`. Either way `f` runs exactly once.
pub fn on_load<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let window = crate::window()?;
    let document = crate::document()?;

    if document.ready_state() == "complete" {
        f();
        return Ok(());
    }

    let closure = Closure::once(f);
    window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    // The listener lives for the rest of the page
    closure.forget();
    Ok(())
}
