//! Form submit guard: busy state with a timed fallback restore.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::config::Labels;
use crate::core::element::SubmitControl;
use crate::core::schedule::{Scheduler, TimerHandle};

/// State captured before a control enters its busy state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusySnapshot {
    original_label: String,
}

impl BusySnapshot {
    /// Label visible before the busy state.
    #[must_use]
    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}

/// Capture the control's label, then switch it to busy.
///
/// Returns `None` when the control is already busy; the live snapshot stays the only
/// one able to restore it.
pub fn begin_busy<C: SubmitControl>(control: &C, labels: &Labels) -> Option<BusySnapshot> {
    if control.is_busy() {
        return None;
    }
    let snapshot = BusySnapshot {
        original_label: control.label(),
    };
    control.mark_busy(true);
    control.show_busy(labels);
    control.set_disabled(true);
    Some(snapshot)
}

/// Undo [`begin_busy`] using the snapshot it returned. The control always ends up
/// enabled.
pub fn end_busy<C: SubmitControl>(control: &C, snapshot: BusySnapshot) {
    control.restore_label(&snapshot.original_label);
    control.set_disabled(false);
    control.mark_busy(false);
}

/// A control in its busy state together with the fallback timer that will restore it.
///
/// Whichever of [`SubmitGuard::complete`] or the fallback runs first restores the
/// control; the other becomes a no-op.
pub struct SubmitGuard<H: TimerHandle> {
    restore: Rc<dyn Fn()>,
    fallback: H,
}

impl<H: TimerHandle> SubmitGuard<H> {
    /// Restore the control now and cancel the fallback.
    pub fn complete(self) {
        (self.restore)();
        self.fallback.cancel();
    }

    /// Leave restoration to the fallback timer.
    pub fn detach(self) {
        self.fallback.detach();
    }
}

/// Put `control` into its busy state and schedule the restore after `fallback`.
///
/// A submit while the control is still busy is ignored and returns `None`; the first
/// guard's fallback remains in charge of restoring it.
pub fn guard_submit<C, S>(
    control: C,
    labels: &Labels,
    fallback: Duration,
    scheduler: &S,
) -> Option<SubmitGuard<S::Handle>>
where
    C: SubmitControl + 'static,
    S: Scheduler,
{
    let snapshot = RefCell::new(Some(begin_busy(&control, labels)?));
    let restore: Rc<dyn Fn()> = Rc::new(move || {
        if let Some(snapshot) = snapshot.borrow_mut().take() {
            end_busy(&control, snapshot);
        }
    });
    let fallback = scheduler.schedule(fallback, {
        let restore = Rc::clone(&restore);
        Box::new(move || restore())
    });
    Some(SubmitGuard { restore, fallback })
}
