//! Virtual clock and in-memory elements for native behaviour tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::core::config::Labels;
use crate::core::element::{Detachable, RippleHost, StyleTarget, SubmitControl};
use crate::core::geometry::{Rect, RippleGeometry};
use crate::core::schedule::{Scheduler, Task, TimerHandle};

type TimerKey = (Duration, u64);

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerKey, Task>,
}

/// Scheduler driven by [`ManualScheduler::advance`] instead of wall time.
///
/// Tasks due at the same instant run in scheduling order.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl ManualScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward, running every task that falls due, including tasks
    /// scheduled by other tasks inside the window.
    pub(crate) fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let task = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .pending
                    .keys()
                    .next()
                    .copied()
                    .filter(|(at, _)| *at <= target);
                due.and_then(|key| {
                    state.now = key.0;
                    state.pending.remove(&key)
                })
            };
            match task {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, task: Task) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let key = (state.now + delay, state.next_id);
        state.next_id += 1;
        state.pending.insert(key, task);
        ManualTimer {
            key,
            state: Rc::downgrade(&self.state),
        }
    }
}

pub(crate) struct ManualTimer {
    key: TimerKey,
    state: Weak<RefCell<ClockState>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().pending.remove(&self.key);
        }
    }

    fn detach(self) {}
}

#[derive(Default)]
struct ElementState {
    attached: bool,
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// Element recording inline styles, classes and attachment.
#[derive(Clone, Default)]
pub(crate) struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub(crate) fn attached() -> Self {
        let element = Self::default();
        element.state.borrow_mut().attached = true;
        element
    }

    pub(crate) fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }
}

impl StyleTarget for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }
}

impl Detachable for FakeElement {
    fn detach(&self) {
        self.state.borrow_mut().attached = false;
    }
}

struct ButtonState {
    label: String,
    markup: String,
    disabled: bool,
    busy: bool,
    bounds: Rect,
    overlays: Vec<FakeElement>,
    refuse_overlays: bool,
}

/// Submit control and ripple host in one.
#[derive(Clone)]
pub(crate) struct FakeButton {
    state: Rc<RefCell<ButtonState>>,
}

impl FakeButton {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ButtonState {
                label: label.to_string(),
                markup: label.to_string(),
                disabled: false,
                busy: false,
                bounds: Rect {
                    left: 0.0,
                    top: 0.0,
                    width: 0.0,
                    height: 0.0,
                },
                overlays: Vec::new(),
                refuse_overlays: false,
            })),
        }
    }

    pub(crate) fn with_bounds(self, bounds: Rect) -> Self {
        self.state.borrow_mut().bounds = bounds;
        self
    }

    pub(crate) fn refuse_overlays(&self) {
        self.state.borrow_mut().refuse_overlays = true;
    }

    pub(crate) fn markup(&self) -> String {
        self.state.borrow().markup.clone()
    }

    pub(crate) fn overlays(&self) -> Vec<FakeElement> {
        self.state.borrow().overlays.clone()
    }

    pub(crate) fn live_overlays(&self) -> usize {
        self.state
            .borrow()
            .overlays
            .iter()
            .filter(|overlay| overlay.is_attached())
            .count()
    }
}

impl SubmitControl for FakeButton {
    fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    fn show_busy(&self, labels: &Labels) {
        let mut state = self.state.borrow_mut();
        state.label.clone_from(&labels.busy_text);
        state.markup = format!(
            r#"<span class="{}"></span>{}"#,
            labels.busy_indicator_class, labels.busy_text
        );
    }

    fn restore_label(&self, label: &str) {
        let mut state = self.state.borrow_mut();
        state.label = label.to_string();
        state.markup = label.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    fn mark_busy(&self, busy: bool) {
        self.state.borrow_mut().busy = busy;
    }
}

impl RippleHost for FakeButton {
    type Overlay = FakeElement;

    fn bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    fn spawn_overlay(&self, geometry: &RippleGeometry, class: &str) -> Option<FakeElement> {
        if self.state.borrow().refuse_overlays {
            return None;
        }
        let overlay = FakeElement::attached();
        for (property, value) in geometry.style_declarations() {
            overlay.set_style(property, &value);
        }
        overlay.state.borrow_mut().classes.insert(class.to_string());
        self.state.borrow_mut().overlays.push(overlay.clone());
        Some(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::ManualScheduler;
    use crate::core::schedule::{Scheduler, TimerHandle};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn same_instant_tasks_run_in_scheduling_order() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            clock
                .schedule(
                    Duration::from_millis(10),
                    Box::new(move || log.borrow_mut().push(name)),
                )
                .detach();
        }
        clock.advance(Duration::from_millis(10));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn chained_tasks_inside_the_window_run() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        let inner_clock = clock.clone();
        let flag = Rc::clone(&fired);
        clock
            .schedule(
                Duration::from_millis(5),
                Box::new(move || {
                    inner_clock
                        .schedule(
                            Duration::from_millis(5),
                            Box::new(move || *flag.borrow_mut() = true),
                        )
                        .detach();
                }),
            )
            .detach();
        clock.advance(Duration::from_millis(10));
        assert!(*fired.borrow());
    }
}
