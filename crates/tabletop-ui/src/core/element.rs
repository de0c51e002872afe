//! Minimal element capabilities the behaviours need.
//!
//! The browser layer implements these for `web-sys` handles; tests use in-memory
//! fakes. Implementations must stay inert when the element has left the document.

use crate::core::config::Labels;
use crate::core::geometry::{Rect, RippleGeometry};

/// Element whose inline style can be written.
pub trait StyleTarget {
    /// Set one inline style property. Failures are swallowed by the implementation.
    fn set_style(&self, property: &str, value: &str);
}

/// Element that can be taken out of its parent.
pub trait Detachable {
    /// Remove the element from its parent. A no-op when already detached.
    fn detach(&self);
}

/// Submit button or input whose label and interactivity can be swapped.
pub trait SubmitControl {
    /// Currently visible label.
    fn label(&self) -> String;
    /// Replace the label with the busy indicator and text.
    fn show_busy(&self, labels: &Labels);
    /// Put a plain-text label back.
    fn restore_label(&self, label: &str);
    /// Whether the control rejects interaction.
    fn is_disabled(&self) -> bool;
    /// Toggle interaction.
    fn set_disabled(&self, disabled: bool);
    /// Whether a busy state is currently applied.
    fn is_busy(&self) -> bool;
    /// Record that a busy state was applied or cleared.
    fn mark_busy(&self, busy: bool);
}

/// Element that can host transient ripple overlays.
pub trait RippleHost {
    /// Overlay element type appended to the host.
    type Overlay: Detachable + 'static;

    /// Bounding box of the host in client coordinates.
    fn bounds(&self) -> Rect;
    /// Create an overlay carrying `class`, position it and append it to the host.
    /// Returns `None` when the DOM refuses the insertion.
    fn spawn_overlay(&self, geometry: &RippleGeometry, class: &str) -> Option<Self::Overlay>;
}
