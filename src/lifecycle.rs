use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document};

use crate::error::{describe, BehaviorError};

/// Only a document that is still parsing has a `DOMContentLoaded` ahead of it.
pub fn must_wait(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Runs `on_ready` exactly once, after the document structure is parsed.
pub fn when_ready<F>(on_ready: F) -> Result<(), BehaviorError>
where
    F: FnOnce(&Document) + 'static,
{
    let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;
    let document = window.document().ok_or(BehaviorError::NoDocument)?;

    if !must_wait(&document.ready_state()) {
        debug!("Document already parsed, attaching now");
        on_ready(&document);
        return Ok(());
    }

    let ready_document = document.clone();
    let callback = Closure::once_into_js(move || on_ready(&ready_document));

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|e| BehaviorError::ListenerError(describe(&e)))
}
