//! The small slice of the DOM the behaviors touch, as traits, plus their
//! `web-sys` implementations.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::error::{describe, BehaviorError};

#[cfg_attr(test, mockall::automock)]
pub trait StyleSink {
    fn set_style(&self, property: &str, value: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait NavigationEvent {
    fn suppress_navigation(&self);
}

#[cfg_attr(test, mockall::automock)]
pub trait SmoothScroll {
    fn scroll_smoothly(&self);
}

#[cfg_attr(test, mockall::automock(type Target = MockSmoothScroll;))]
pub trait FragmentLookup {
    type Target: SmoothScroll;

    fn find_fragment(&self, id: &str) -> Option<Self::Target>;
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[cfg_attr(test, mockall::automock)]
pub trait Watcher<E: 'static> {
    fn watch(&self, element: &E);
    fn unwatch(&self, element: &E);
}

impl StyleSink for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.style().set_property(property, value) {
            warn!("Failed to set {}: {} ({})", property, value, describe(&err));
        }
    }
}

impl NavigationEvent for Event {
    fn suppress_navigation(&self) {
        self.prevent_default();
    }
}

impl SmoothScroll for Element {
    fn scroll_smoothly(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl FragmentLookup for Document {
    type Target = Element;

    fn find_fragment(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Browser timers; scheduled tasks can't be cancelled.
pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

impl Watcher<HtmlElement> for IntersectionObserver {
    fn watch(&self, element: &HtmlElement) {
        self.observe(element);
    }

    fn unwatch(&self, element: &HtmlElement) {
        self.unobserve(element);
    }
}

/// Every element matching `selector` that casts to `T`; the rest are skipped.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, BehaviorError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| BehaviorError::SelectorError(format!("{}: {}", selector, describe(&e))))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Attaches to each item in turn, carrying on past failures so one bad
/// listener doesn't leave the rest unwired. Errors only when nothing was wired.
pub fn wire_each<T, F>(items: &[T], mut wire: F) -> Result<usize, BehaviorError>
where
    F: FnMut(&T) -> Result<(), BehaviorError>,
{
    let mut wired = 0;
    let mut last_error = None;

    for item in items {
        match wire(item) {
            Ok(()) => wired += 1,
            Err(err) => {
                warn!("Listener not attached: {}", err);
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) if wired == 0 => Err(err),
        Some(_) => {
            warn!("Wired {} of {} elements", wired, items.len());
            Ok(wired)
        }
        None => Ok(wired),
    }
}
