use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::dom::{Scheduler, StyleSink};

/// Element stand-in that records every style write. Clones share the record,
/// like handles to the same DOM node.
#[derive(Clone, Debug)]
pub struct FakeElement {
    id: &'static str,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl FakeElement {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
    }

    pub fn history(&self, property: &str) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl StyleSink for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.writes
            .borrow_mut()
            .push((property.to_string(), value.to_string()));
    }
}

/// Timer queue driven by hand; tasks run in scheduling order.
#[derive(Default)]
pub struct ManualTimers {
    queue: RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualTimers {
    pub fn pending_delays(&self) -> Vec<u32> {
        self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_next(&self) -> bool {
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some((_, task)) => {
                task();
                true
            }
            None => false,
        }
    }

    pub fn run_all(&self) {
        while self.run_next() {}
    }
}

impl Scheduler for ManualTimers {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back((delay_ms, task));
    }
}

/// Real-DOM fixtures for the browser tests.
#[cfg(target_arch = "wasm32")]
pub mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, EventInit, EventTarget, HtmlElement};

    pub fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Puts `html` at the top of the body inside a fresh container.
    pub fn mount(html: &str) -> HtmlElement {
        let document = document();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        root.set_inner_html(html);

        let body = document.body().unwrap();
        body.insert_before(&root, body.first_child().as_ref()).unwrap();
        root
    }

    pub fn find<T: JsCast>(root: &HtmlElement, selector: &str) -> T {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {}", selector))
            .unchecked_into()
    }

    /// A plain cancelable `click` Event. Not a MouseEvent, so anchors don't
    /// run their activation behavior and the test page stays put.
    pub fn click(target: &EventTarget) -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("click", &init).unwrap();
        target.dispatch_event(&event).unwrap();
        event
    }

    pub fn style_of(element: &HtmlElement, property: &str) -> String {
        element.style().get_property_value(property).unwrap()
    }
}
