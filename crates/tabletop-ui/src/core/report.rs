//! Summary of what `initialize` attached to.

use std::fmt;

/// Counts of elements wired by each behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Forms with a submit guard.
    pub forms: usize,
    /// Cards with hover listeners.
    pub cards: usize,
    /// Alerts with a scheduled dismissal.
    pub alerts: usize,
    /// Buttons emitting ripples.
    pub ripple_buttons: usize,
}

impl InitReport {
    /// Whether no behaviour found anything to attach to.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.forms == 0 && self.cards == 0 && self.alerts == 0 && self.ripple_buttons == 0
    }
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "forms={} cards={} alerts={} ripple_buttons={}",
            self.forms, self.cards, self.alerts, self.ripple_buttons
        )
    }
}
