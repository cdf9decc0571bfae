use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("selector error: {0}")]
    SelectorError(String),
    #[error("listener error: {0}")]
    ListenerError(String),
    #[error("intersection observer error: {0}")]
    ObserverError(String),
    #[error("config error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for BehaviorError {
    fn from(err: serde_json::Error) -> Self {
        BehaviorError::ConfigError(err.to_string())
    }
}

/// Turns a thrown JS value into something readable for logs.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
