use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::{wire_each, FragmentLookup, NavigationEvent, SmoothScroll};
use crate::error::{describe, BehaviorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Same-page reference; holds the id after the `#`.
    Fragment(&'a str),
    /// Anything else, including a missing `href`. The browser handles it.
    Elsewhere,
}

pub fn classify(href: Option<&str>) -> LinkTarget<'_> {
    match href.and_then(|href| href.strip_prefix('#')) {
        Some(id) => LinkTarget::Fragment(id),
        None => LinkTarget::Elsewhere,
    }
}

/// Returns true when a scroll was started.
pub fn handle_click<L, E>(lookup: &L, href: Option<&str>, event: &E) -> bool
where
    L: FragmentLookup,
    E: NavigationEvent,
{
    let id = match classify(href) {
        LinkTarget::Fragment(id) => id,
        LinkTarget::Elsewhere => return false,
    };

    event.suppress_navigation();
    match lookup.find_fragment(id) {
        Some(target) => {
            target.scroll_smoothly();
            true
        }
        None => {
            debug!("No element with id '{}', skipping scroll", id);
            false
        }
    }
}

pub fn bind(document: &Document, links: &[Element]) -> Result<usize, BehaviorError> {
    wire_each(links, |link| {
        let document = document.clone();
        let anchor = link.clone();

        // href is read per click, not captured at bind time.
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let href = anchor.get_attribute("href");
            handle_click(&document, href.as_deref(), &event);
        }) as Box<dyn FnMut(Event)>);

        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::ListenerError(describe(&e)))?;
        on_click.forget();
        Ok(())
    })
}
