use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::error::BehaviorError;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav_link_selector: String,
    pub button_selector: String,
    pub reveal_selector: String,
    pub feedback: FeedbackConfig,
    pub reveal: RevealConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_link_selector: ".nav__link".to_string(),
            button_selector: ".btn".to_string(),
            reveal_selector: ".feature, .member-card".to_string(),
            feedback: FeedbackConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub dimmed_opacity: f64,
    pub restore_after_ms: u32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            dimmed_opacity: 0.8,
            restore_after_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: f64,
    pub duration_secs: f64,
    pub easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 20.0,
            duration_secs: 0.6,
            easing: "ease".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    pub fn transition(&self) -> String {
        format!(
            "opacity {d}s {e}, transform {d}s {e}",
            d = self.duration_secs,
            e = self.easing
        )
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BehaviorError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.feedback.dimmed_opacity) {
            return Err(BehaviorError::ConfigError(format!(
                "feedback.dimmed_opacity must be within [0, 1], got {}",
                self.feedback.dimmed_opacity
            )));
        }
        if !unit.contains(&self.reveal.threshold) {
            return Err(BehaviorError::ConfigError(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if !self.reveal.offset_px.is_finite() || !self.reveal.duration_secs.is_finite() {
            return Err(BehaviorError::ConfigError(
                "reveal offset and duration must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads overrides embedded in the page, falling back to the defaults.
    pub fn load(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) => PageConfig::from_json(&raw).unwrap_or_else(|err| {
                warn!("Ignoring #{} block: {}", CONFIG_ELEMENT_ID, err);
                PageConfig::default()
            }),
            None => PageConfig::default(),
        }
    }
}
