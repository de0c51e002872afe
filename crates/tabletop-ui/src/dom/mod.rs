//! Browser wiring for the core behaviours.
//!
//! [`run`] is the page entry point: it injects the global style block right away and
//! calls [`initialize`] once the document has been parsed.

mod elements;
mod timers;

use std::time::Duration;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::core::alert::schedule_dismissal;
use crate::core::config::{CONFIG_ELEMENT_ID, EnhanceConfig, Labels};
use crate::core::element::StyleTarget;
use crate::core::hover::{PointerTransition, apply_hover};
use crate::core::report::InitReport;
use crate::core::ripple::emit_ripple;
use crate::core::schedule::TimerHandle;
use crate::core::styles::{STYLE_ELEMENT_ID, stylesheet};
use crate::core::submit::guard_submit;
use crate::error::EnhanceError;

use elements::{DomElement, RippleButton, SubmitButton, click_point, dom_error, query_all};
pub use timers::{BrowserScheduler, BrowserTimer};

/// Listeners attached by [`initialize`].
///
/// Dropping this value removes every listener; call [`Enhancements::persist`] to keep
/// them for the lifetime of the page. Scheduled alert timers are not affected.
pub struct Enhancements {
    listeners: Vec<EventListener>,
    report: InitReport,
}

impl Enhancements {
    /// What each behaviour attached to.
    #[must_use]
    pub const fn report(&self) -> InitReport {
        self.report
    }

    /// Leak the listeners so they outlive this handle.
    pub fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Scan `document` once and attach every behaviour.
///
/// Elements inserted after this call are not enhanced.
///
/// # Errors
///
/// Returns [`EnhanceError::Dom`] when a configured selector is rejected by the browser.
pub fn initialize(
    document: &Document,
    config: &EnhanceConfig,
) -> Result<Enhancements, EnhanceError> {
    let scheduler = BrowserScheduler;
    let selectors = &config.selectors;
    let mut listeners = Vec::new();
    let mut report = InitReport::default();

    if config.smooth_scroll {
        enable_smooth_scroll(document);
    }

    for form in query_all(document, &selectors.forms)? {
        listeners.push(submit_listener(
            &form,
            selectors.submit_control.clone(),
            config.labels.clone(),
            config.timings.submit_fallback(),
        ));
        report.forms += 1;
    }

    for card in query_all(document, &selectors.cards)? {
        listeners.extend(hover_listeners(&card, config.effects.hover_lift_px));
        report.cards += 1;
    }

    for alert in query_all(document, &selectors.alerts)? {
        schedule_dismissal(
            DomElement::new(alert),
            &config.timings,
            &config.effects,
            &scheduler,
        )
        .detach();
        report.alerts += 1;
    }

    for button in query_all(document, &selectors.ripple_buttons)? {
        listeners.push(ripple_listener(
            button,
            selectors.ripple_class.clone(),
            config.timings.ripple_lifetime(),
        ));
        report.ripple_buttons += 1;
    }

    console::debug!("tabletop-ui initialised", report.to_string());
    Ok(Enhancements { listeners, report })
}

fn submit_listener(
    form: &HtmlElement,
    control_selector: String,
    labels: Labels,
    fallback: Duration,
) -> EventListener {
    let scoped = form.clone();
    EventListener::new(form, "submit", move |_event| {
        let control = match scoped.query_selector(&control_selector) {
            Ok(found) => found.and_then(SubmitButton::from_element),
            Err(err) => {
                console::warn!("submit control lookup failed", elements::describe(&err));
                None
            }
        };
        let Some(control) = control else {
            return;
        };
        if let Some(guard) = guard_submit(control, &labels, fallback, &BrowserScheduler) {
            guard.detach();
        }
    })
}

fn hover_listeners(card: &HtmlElement, lift_px: f64) -> [EventListener; 2] {
    [PointerTransition::Enter, PointerTransition::Leave].map(|transition| {
        let target = DomElement::new(card.clone());
        EventListener::new(card, transition.event_name(), move |_event| {
            apply_hover(&target, transition, lift_px);
        })
    })
}

fn ripple_listener(button: HtmlElement, class: String, lifetime: Duration) -> EventListener {
    let host = RippleButton::new(button.clone());
    EventListener::new(&button, "click", move |event| {
        let Some(click) = click_point(event) else {
            return;
        };
        if let Some(timer) = emit_ripple(&host, click, &class, lifetime, &BrowserScheduler) {
            timer.detach();
        }
    })
}

fn enable_smooth_scroll(document: &Document) {
    if let Some(root) = document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        DomElement::new(root).set_style("scroll-behavior", "smooth");
    }
}

/// Append the ripple stylesheet to `<head>` unless it is already present.
///
/// Returns `true` when a new style element was inserted.
///
/// # Errors
///
/// Returns [`EnhanceError::MissingHead`] without a `<head>`, or
/// [`EnhanceError::Dom`] when the element cannot be created or appended.
pub fn inject_styles(document: &Document, config: &EnhanceConfig) -> Result<bool, EnhanceError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let head = document.head().ok_or(EnhanceError::MissingHead)?;
    let style = document
        .create_element("style")
        .map_err(dom_error("createElement"))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&stylesheet(config)));
    head.append_child(&style).map_err(dom_error("appendChild"))?;
    Ok(true)
}

/// Read the inline configuration block, falling back to defaults when it is absent
/// or unusable.
#[must_use]
pub fn load_config(document: &Document) -> EnhanceConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return EnhanceConfig::default();
    };
    EnhanceConfig::from_json(&text).unwrap_or_else(|err| {
        console::warn!("ignoring tabletop-ui config", err.to_string());
        EnhanceConfig::default()
    })
}

/// Page entry point.
///
/// The configuration block is read immediately, so it must precede the script tag
/// that loads this module.
///
/// # Errors
///
/// Returns an error when no window or document is available or the style block
/// cannot be injected.
pub fn run() -> Result<(), EnhanceError> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or(EnhanceError::MissingWindow)?;
    let document = window.document().ok_or(EnhanceError::MissingDocument)?;
    let config = load_config(&document);
    inject_styles(&document, &config)?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_event| {
            boot(&document, &config);
        })
        .forget();
    } else {
        boot(&document, &config);
    }
    Ok(())
}

fn boot(document: &Document, config: &EnhanceConfig) {
    match initialize(document, config) {
        Ok(enhancements) => enhancements.persist(),
        Err(err) => console::error!("tabletop-ui initialisation failed", err.to_string()),
    }
}
