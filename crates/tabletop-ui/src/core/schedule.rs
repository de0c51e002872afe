//! Timer scheduling seam.
//!
//! Every delayed mutation goes through a [`Scheduler`] and hands back a handle the
//! caller owns. Dropping responsibility is explicit: call [`TimerHandle::detach`]
//! to let the task fire on its own, or [`TimerHandle::cancel`] to stop it.

use std::time::Duration;

/// Deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce()>;

/// Ownership of one scheduled task.
pub trait TimerHandle {
    /// Prevent the task from running. Inert once the task has fired.
    fn cancel(self);
    /// Give up ownership; the task runs when its delay elapses.
    fn detach(self);
}

/// Something that can run a task after a delay on the current thread.
pub trait Scheduler: Clone + 'static {
    /// Handle returned for each scheduled task.
    type Handle: TimerHandle;

    /// Schedule `task` to run once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

/// Longest delay `setTimeout` honours; larger values wrap to a negative `i32` and fire
/// immediately.
pub const MAX_DELAY_MS: u32 = i32::MAX.unsigned_abs();

/// Clamp a delay into the millisecond range accepted by browser timers.
#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |millis| millis.min(MAX_DELAY_MS))
}
