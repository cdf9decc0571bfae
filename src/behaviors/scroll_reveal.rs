use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom::{StyleSink, Watcher};
use crate::error::{describe, BehaviorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Terminal. The card is no longer watched.
    Revealed,
}

#[derive(Debug)]
struct Card<E> {
    element: E,
    state: RevealState,
}

/// Per-card reveal state for every block handed to the watcher.
#[derive(Debug)]
pub struct RevealBoard<E> {
    cards: Vec<Card<E>>,
}

impl<E> Default for RevealBoard<E> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<E> RevealBoard<E>
where
    E: StyleSink + PartialEq + 'static,
{
    /// Puts the card in its hidden pose and starts watching it.
    pub fn track<W: Watcher<E>>(&mut self, element: E, config: &RevealConfig, watcher: &W) {
        element.set_style("opacity", "0");
        element.set_style("transform", &config.hidden_transform());
        element.set_style("transition", &config.transition());
        watcher.watch(&element);

        self.cards.push(Card {
            element,
            state: RevealState::Hidden,
        });
    }

    /// Handles one visibility notification. Returns true if it revealed the card.
    pub fn notify<W: Watcher<E>>(&mut self, target: &E, intersecting: bool, watcher: &W) -> bool {
        if !intersecting {
            return false;
        }

        let card = match self.cards.iter_mut().find(|card| card.element == *target) {
            Some(card) => card,
            None => return false,
        };
        if card.state == RevealState::Revealed {
            return false;
        }

        card.element.set_style("opacity", "1");
        card.element.set_style("transform", "translateY(0)");
        card.state = RevealState::Revealed;
        watcher.unwatch(&card.element);
        true
    }

    #[cfg(test)]
    pub fn state_of(&self, target: &E) -> Option<RevealState> {
        self.cards
            .iter()
            .find(|card| card.element == *target)
            .map(|card| card.state)
    }

    pub fn hidden_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.state == RevealState::Hidden)
            .count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn observer_options(config: &RevealConfig) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    options
}

pub fn bind(cards: Vec<HtmlElement>, config: &RevealConfig) -> Result<usize, BehaviorError> {
    if cards.is_empty() {
        return Ok(0);
    }

    let board: Rc<RefCell<RevealBoard<HtmlElement>>> = Rc::new(RefCell::new(RevealBoard::default()));

    let callback_board = board.clone();
    let on_visibility = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let mut board = callback_board.borrow_mut();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                continue;
            };
            board.notify(&target, entry.is_intersecting(), &observer);
        }
        match board.hidden_count() {
            0 if !board.is_empty() => debug!("All cards revealed"),
            hidden => debug!("{} cards still hidden", hidden),
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    // Build the observer before touching any styles, so a host without
    // IntersectionObserver leaves the cards visible.
    let observer = IntersectionObserver::new_with_options(
        on_visibility.as_ref().unchecked_ref(),
        &observer_options(config),
    )
    .map_err(|e| BehaviorError::ObserverError(describe(&e)))?;
    on_visibility.forget();

    let mut board = board.borrow_mut();
    for card in cards {
        board.track(card, config, &observer);
    }
    Ok(board.len())
}
