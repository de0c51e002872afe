//! Click ripples: one transient overlay per click, removed after a fixed lifetime.

use std::time::Duration;

use crate::core::element::{Detachable, RippleHost};
use crate::core::geometry::{Point, RippleGeometry};
use crate::core::schedule::Scheduler;

/// Append a ripple overlay centred on `click` and schedule its removal.
///
/// Returns the removal timer, or `None` when the host refused the overlay.
pub fn emit_ripple<H, S>(
    host: &H,
    click: Point,
    class: &str,
    lifetime: Duration,
    scheduler: &S,
) -> Option<S::Handle>
where
    H: RippleHost,
    S: Scheduler,
{
    let geometry = RippleGeometry::from_click(host.bounds(), click);
    let overlay = host.spawn_overlay(&geometry, class)?;
    Some(scheduler.schedule(lifetime, Box::new(move || overlay.detach())))
}
