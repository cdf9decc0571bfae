use log::{error, info};

mod config;
mod dom;
mod error;
mod lifecycle;
mod page;
mod behaviors {
    pub mod button_feedback;
    pub mod scroll_reveal;
    pub mod smooth_scroll;
}

#[cfg(test)]
mod test_support;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behaviors");
    if let Err(err) = lifecycle::when_ready(page::attach) {
        error!("Page behaviors not attached: {}", err);
    }
}
