//! Enhancement configuration: selectors, timings, labels and effect strengths.
//!
//! Pages may embed a partial JSON document in a
//! `<script type="application/json" id="tabletop-ui-config">` block; every field it
//! omits keeps its default.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::schedule::MAX_DELAY_MS;

/// Id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "tabletop-ui-config";

/// Structured errors emitted while parsing or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text was not valid JSON for [`EnhanceConfig`].
    #[error("failed to parse enhancement configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Field contained an unusable value.
    #[error("invalid value for '{field}' in '{section}': {reason}")]
    InvalidField {
        /// Section that failed validation.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable reason for the failure.
        reason: &'static str,
    },
}

/// Top-level configuration for every behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhanceConfig {
    /// Element selectors each behaviour binds to.
    pub selectors: Selectors,
    /// Timer durations.
    pub timings: Timings,
    /// Busy-state label content.
    pub labels: Labels,
    /// Visual offsets.
    pub effects: Effects,
    /// Switch the document to smooth scrolling during initialisation.
    pub smooth_scroll: bool,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            timings: Timings::default(),
            labels: Labels::default(),
            effects: Effects::default(),
            smooth_scroll: true,
        }
    }
}

/// CSS selectors used to find enhancement targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    /// Forms guarded on submit.
    pub forms: String,
    /// Submit control looked up inside a submitted form.
    pub submit_control: String,
    /// Cards that lift on hover.
    pub cards: String,
    /// Alert banners dismissed after a delay.
    pub alerts: String,
    /// Buttons that emit ripples.
    pub ripple_buttons: String,
    /// Class applied to each ripple overlay (no leading dot).
    pub ripple_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            forms: "form".to_string(),
            submit_control: r#"button[type="submit"], input[type="submit"]"#.to_string(),
            cards: ".boardgame-card, .modern-card".to_string(),
            alerts: ".error, .success".to_string(),
            ripple_buttons: ".btn-modern".to_string(),
            ripple_class: "ripple".to_string(),
        }
    }
}

/// Timer durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    /// Fallback before a busy submit control is restored.
    pub submit_fallback_ms: u32,
    /// Delay before an alert starts fading.
    pub alert_delay_ms: u32,
    /// Fade length before an alert is removed from layout.
    pub alert_fade_ms: u32,
    /// Ripple overlay lifetime; also the CSS animation length.
    pub ripple_lifetime_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_fallback_ms: 3_000,
            alert_delay_ms: 5_000,
            alert_fade_ms: 300,
            ripple_lifetime_ms: 600,
        }
    }
}

impl Timings {
    /// Fallback delay for the submit guard.
    #[must_use]
    pub fn submit_fallback(&self) -> Duration {
        Duration::from_millis(u64::from(self.submit_fallback_ms))
    }

    /// Delay before alerts begin fading.
    #[must_use]
    pub fn alert_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.alert_delay_ms))
    }

    /// Fade duration between the fade start and removal from layout.
    #[must_use]
    pub fn alert_fade(&self) -> Duration {
        Duration::from_millis(u64::from(self.alert_fade_ms))
    }

    /// Lifetime of a ripple overlay.
    #[must_use]
    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.ripple_lifetime_ms))
    }
}

/// Content shown while a submit control is busy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Text shown after the spinner.
    pub busy_text: String,
    /// Class list of the spinner element placed before the text.
    pub busy_indicator_class: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            busy_text: "Processing...".to_string(),
            busy_indicator_class: "loading me-2".to_string(),
        }
    }
}

/// Offsets applied by the hover and alert behaviours, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Effects {
    /// Upward lift of a hovered card.
    pub hover_lift_px: f64,
    /// Upward slide of a fading alert.
    pub alert_slide_px: f64,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            hover_lift_px: 2.0,
            alert_slide_px: 10.0,
        }
    }
}

impl EnhanceConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for usable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("forms", &self.selectors.forms),
            ("submit_control", &self.selectors.submit_control),
            ("cards", &self.selectors.cards),
            ("alerts", &self.selectors.alerts),
            ("ripple_buttons", &self.selectors.ripple_buttons),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(invalid("selectors", field, "must not be empty"));
            }
        }
        if !is_class_name(&self.selectors.ripple_class) {
            return Err(invalid(
                "selectors",
                "ripple_class",
                "must be a single class name without a leading dot",
            ));
        }

        let timings = [
            ("submit_fallback_ms", self.timings.submit_fallback_ms),
            ("alert_delay_ms", self.timings.alert_delay_ms),
            ("alert_fade_ms", self.timings.alert_fade_ms),
            ("ripple_lifetime_ms", self.timings.ripple_lifetime_ms),
        ];
        for (field, value) in timings {
            if value == 0 {
                return Err(invalid("timings", field, "must be greater than zero"));
            }
            if value > MAX_DELAY_MS {
                return Err(invalid(
                    "timings",
                    field,
                    "must not exceed 2147483647 ms (browser timer limit)",
                ));
            }
        }

        for (field, value) in [
            ("hover_lift_px", self.effects.hover_lift_px),
            ("alert_slide_px", self.effects.alert_slide_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid("effects", field, "must be a finite, non-negative number"));
            }
        }
        Ok(())
    }
}

const fn invalid(section: &'static str, field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        section,
        field,
        reason,
    }
}

fn is_class_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
