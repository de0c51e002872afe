//! Card hover lift.

use crate::core::element::StyleTarget;

/// Pointer crossing a card boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTransition {
    /// `mouseenter`.
    Enter,
    /// `mouseleave`.
    Leave,
}

impl PointerTransition {
    /// DOM event name that triggers this transition.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }
}

/// Absolute vertical offset for a pointer transition and lift.
#[must_use]
pub fn hover_transform(transition: PointerTransition, lift_px: f64) -> String {
    match transition {
        PointerTransition::Enter => format!("translateY(-{lift_px}px)"),
        PointerTransition::Leave => "translateY(0)".to_string(),
    }
}

/// Write the transform for `transition` onto `card`.
pub fn apply_hover<T: StyleTarget>(card: &T, transition: PointerTransition, lift_px: f64) {
    card.set_style("transform", &hover_transform(transition, lift_px));
}
