//! `web-sys` implementations of the core element traits.

use gloo::console;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement, MouseEvent,
};

use crate::core::config::Labels;
use crate::core::element::{Detachable, RippleHost, StyleTarget, SubmitControl};
use crate::core::geometry::{Point, Rect, RippleGeometry};
use crate::error::EnhanceError;

/// Map a rejected DOM call into [`EnhanceError::Dom`].
pub(crate) fn dom_error(operation: &'static str) -> impl FnOnce(JsValue) -> EnhanceError {
    move |value| EnhanceError::Dom {
        operation,
        detail: describe(&value),
    }
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// All `HtmlElement`s matching `selector`, in document order.
pub(crate) fn query_all(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, EnhanceError> {
    let list = document
        .query_selector_all(selector)
        .map_err(dom_error("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Client coordinates of a mouse event.
pub(crate) fn click_point(event: &Event) -> Option<Point> {
    event.dyn_ref::<MouseEvent>().map(|mouse| Point {
        x: f64::from(mouse.client_x()),
        y: f64::from(mouse.client_y()),
    })
}

/// Styleable, removable element handle.
#[derive(Clone, Debug)]
pub(crate) struct DomElement(HtmlElement);

impl DomElement {
    pub(crate) const fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl StyleTarget for DomElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.0.style().set_property(property, value) {
            console::warn!("style update failed", property, describe(&err));
        }
    }
}

impl Detachable for DomElement {
    fn detach(&self) {
        self.0.remove();
    }
}

/// `<button>` or `<input>` acting as a form's submit control.
#[derive(Clone, Debug)]
pub(crate) enum SubmitButton {
    Button(HtmlButtonElement),
    Input(HtmlInputElement),
}

/// Attribute present on a submit control while its busy state is applied.
const BUSY_ATTRIBUTE: &str = "data-tabletop-busy";

impl SubmitButton {
    pub(crate) fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlButtonElement>() {
            Ok(button) => Some(Self::Button(button)),
            Err(element) => element.dyn_into::<HtmlInputElement>().ok().map(Self::Input),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Self::Button(button) => button.as_ref(),
            Self::Input(input) => input.as_ref(),
        }
    }
}

fn render_busy(button: &HtmlButtonElement, labels: &Labels) -> Result<(), JsValue> {
    let document = button
        .owner_document()
        .ok_or_else(|| JsValue::from_str("button has no owner document"))?;
    let indicator = document.create_element("span")?;
    indicator.set_class_name(&labels.busy_indicator_class);
    button.set_text_content(None);
    button.append_child(&indicator)?;
    button.append_child(&document.create_text_node(&labels.busy_text))?;
    Ok(())
}

impl SubmitControl for SubmitButton {
    fn label(&self) -> String {
        match self {
            Self::Button(button) => button.text_content().unwrap_or_default(),
            Self::Input(input) => input.value(),
        }
    }

    fn show_busy(&self, labels: &Labels) {
        match self {
            Self::Button(button) => {
                if let Err(err) = render_busy(button, labels) {
                    console::warn!("busy label render failed", describe(&err));
                }
            }
            Self::Input(input) => input.set_value(&labels.busy_text),
        }
    }

    fn restore_label(&self, label: &str) {
        match self {
            Self::Button(button) => button.set_text_content(Some(label)),
            Self::Input(input) => input.set_value(label),
        }
    }

    fn is_disabled(&self) -> bool {
        match self {
            Self::Button(button) => button.disabled(),
            Self::Input(input) => input.disabled(),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        match self {
            Self::Button(button) => button.set_disabled(disabled),
            Self::Input(input) => input.set_disabled(disabled),
        }
    }

    fn is_busy(&self) -> bool {
        self.element().has_attribute(BUSY_ATTRIBUTE)
    }

    fn mark_busy(&self, busy: bool) {
        let element = self.element();
        let result = if busy {
            element.set_attribute(BUSY_ATTRIBUTE, "")
        } else {
            element.remove_attribute(BUSY_ATTRIBUTE)
        };
        if let Err(err) = result {
            console::warn!("busy marker update failed", describe(&err));
        }
    }
}

/// Button that receives ripple overlays as children.
#[derive(Clone, Debug)]
pub(crate) struct RippleButton(HtmlElement);

impl RippleButton {
    pub(crate) const fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    fn append_overlay(
        &self,
        geometry: &RippleGeometry,
        class: &str,
    ) -> Result<DomElement, JsValue> {
        let document = self
            .0
            .owner_document()
            .ok_or_else(|| JsValue::from_str("button has no owner document"))?;
        let overlay = document.create_element("span")?.dyn_into::<HtmlElement>()?;
        let overlay = DomElement::new(overlay);
        for (property, value) in geometry.style_declarations() {
            overlay.set_style(property, &value);
        }
        overlay.0.class_list().add_1(class)?;
        self.0.append_child(&overlay.0)?;
        Ok(overlay)
    }
}

impl RippleHost for RippleButton {
    type Overlay = DomElement;

    fn bounds(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn spawn_overlay(&self, geometry: &RippleGeometry, class: &str) -> Option<DomElement> {
        match self.append_overlay(geometry, class) {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                console::warn!("ripple overlay rejected", describe(&err));
                None
            }
        }
    }
}
