use log::{error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::behaviors::{button_feedback, scroll_reveal, smooth_scroll};
use crate::config::PageConfig;
use crate::dom::query_all;
use crate::error::BehaviorError;

/// Everything the behaviors bind to, gathered once when the page is ready.
/// Elements added later are not picked up.
pub struct Bindings {
    pub links: Vec<Element>,
    pub buttons: Vec<HtmlElement>,
    pub cards: Vec<HtmlElement>,
}

impl Bindings {
    pub fn collect(document: &Document, config: &PageConfig) -> Self {
        Self {
            links: gather(document, &config.nav_link_selector),
            buttons: gather(document, &config.button_selector),
            cards: gather(document, &config.reveal_selector),
        }
    }
}

fn gather<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    query_all(document, selector).unwrap_or_else(|err| {
        warn!("Skipping '{}': {}", selector, err);
        Vec::new()
    })
}

fn report(behavior: &str, result: Result<usize, BehaviorError>) {
    match result {
        Ok(count) => info!("{}: wired {} elements", behavior, count),
        Err(err) => error!("{}: {}", behavior, err),
    }
}

/// Wires all three behaviors. A failure in one does not stop the others.
pub fn attach(document: &Document) {
    let config = PageConfig::load(document);
    let Bindings {
        links,
        buttons,
        cards,
    } = Bindings::collect(document, &config);

    report("smooth scroll", smooth_scroll::bind(document, &links));
    report("button feedback", button_feedback::bind(&buttons, &config.feedback));
    report("scroll reveal", scroll_reveal::bind(cards, &config.reveal));
}
