use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::FeedbackConfig;
use crate::dom::{wire_each, BrowserTimers, Scheduler, StyleSink};
use crate::error::{describe, BehaviorError};

const REST_OPACITY: &str = "1";

/// Dims the element now and schedules its own restore. Overlapping presses
/// each restore to the same value, so the last one always leaves it at rest.
pub fn press<E, S>(element: &E, scheduler: &S, config: &FeedbackConfig)
where
    E: StyleSink + Clone + 'static,
    S: Scheduler,
{
    element.set_style("opacity", &config.dimmed_opacity.to_string());

    let element = element.clone();
    scheduler.schedule(
        config.restore_after_ms,
        Box::new(move || element.set_style("opacity", REST_OPACITY)),
    );
}

pub fn bind(buttons: &[HtmlElement], config: &FeedbackConfig) -> Result<usize, BehaviorError> {
    let config = Rc::new(config.clone());

    wire_each(buttons, |button| {
        let config = config.clone();
        let target = button.clone();

        let on_click = Closure::wrap(Box::new(move || {
            press(&target, &BrowserTimers, &config);
        }) as Box<dyn FnMut()>);

        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::ListenerError(describe(&e)))?;
        on_click.forget();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeElement, ManualTimers};

    #[test]
    fn press_dims_then_restores_after_delay() {
        let button = FakeElement::new("join");
        let timers = ManualTimers::default();
        let config = FeedbackConfig::default();

        press(&button, &timers, &config);
        assert_eq!(button.style("opacity").as_deref(), Some("0.8"));
        assert_eq!(timers.pending_delays(), vec![200]);

        timers.run_all();
        assert_eq!(button.style("opacity").as_deref(), Some("1"));
        assert_eq!(button.history("opacity"), vec!["0.8", "1"]);
    }

    #[test]
    fn rapid_presses_never_end_dimmed() {
        let button = FakeElement::new("join");
        let timers = ManualTimers::default();
        let config = FeedbackConfig::default();

        press(&button, &timers, &config);
        press(&button, &timers, &config);
        timers.run_next();
        press(&button, &timers, &config);
        assert_eq!(timers.pending_delays().len(), 2);

        timers.run_all();
        assert_eq!(button.style("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn uses_configured_values() {
        let button = FakeElement::new("join");
        let timers = ManualTimers::default();
        let config = FeedbackConfig {
            dimmed_opacity: 0.5,
            restore_after_ms: 75,
        };

        press(&button, &timers, &config);
        assert_eq!(button.style("opacity").as_deref(), Some("0.5"));
        assert_eq!(timers.pending_delays(), vec![75]);
    }
}
