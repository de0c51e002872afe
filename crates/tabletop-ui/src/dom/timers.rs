//! `gloo` timer backing for the core scheduling seam.

use std::time::Duration;

use gloo::timers::callback::Timeout;

use crate::core::schedule::{Scheduler, Task, TimerHandle, delay_millis};

/// Schedules tasks with `setTimeout` on the page's event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&self, delay: Duration, task: Task) -> BrowserTimer {
        BrowserTimer(Timeout::new(delay_millis(delay), task))
    }
}

/// Pending `setTimeout`; dropping it without [`TimerHandle::detach`] clears the timer.
#[derive(Debug)]
pub struct BrowserTimer(Timeout);

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        drop(self.0);
    }

    fn detach(self) {
        let _timer_id = self.0.forget();
    }
}
