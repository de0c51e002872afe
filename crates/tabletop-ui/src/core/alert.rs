//! Timed alert dismissal: fade, then drop out of layout.

use crate::core::config::{Effects, Timings};
use crate::core::element::StyleTarget;
use crate::core::geometry::px;
use crate::core::schedule::{Scheduler, TimerHandle};

/// Stage an alert passes through on its way out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertStage {
    /// Opacity to zero and slide upward; the page stylesheet animates it.
    Fading,
    /// Removed from layout.
    Hidden,
}

impl AlertStage {
    /// Apply this stage's inline styles.
    pub fn apply<T: StyleTarget>(self, alert: &T, effects: &Effects) {
        match self {
            Self::Fading => {
                alert.set_style("opacity", "0");
                alert.set_style(
                    "transform",
                    &format!("translateY({})", px(-effects.alert_slide_px)),
                );
            }
            Self::Hidden => alert.set_style("display", "none"),
        }
    }
}

/// Schedule the fade after `alert_delay` and the hide `alert_fade` later.
///
/// The returned handle covers the fade timer; cancelling it before the fade starts
/// also prevents the hide. The hide timer is detached once scheduled.
pub fn schedule_dismissal<T, S>(
    alert: T,
    timings: &Timings,
    effects: &Effects,
    scheduler: &S,
) -> S::Handle
where
    T: StyleTarget + 'static,
    S: Scheduler,
{
    let effects = *effects;
    let fade = timings.alert_fade();
    let inner = scheduler.clone();
    scheduler.schedule(
        timings.alert_delay(),
        Box::new(move || {
            AlertStage::Fading.apply(&alert, &effects);
            inner
                .schedule(
                    fade,
                    Box::new(move || AlertStage::Hidden.apply(&alert, &effects)),
                )
                .detach();
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::schedule_dismissal;
    use crate::core::config::{Effects, Timings};
    use crate::core::element::Detachable;
    use crate::core::schedule::TimerHandle;
    use crate::core::testing::{FakeElement, ManualScheduler};
    use std::time::Duration;

    #[test]
    fn fades_at_five_seconds_and_hides_three_hundred_later() {
        let clock = ManualScheduler::new();
        let alert = FakeElement::attached();
        schedule_dismissal(alert.clone(), &Timings::default(), &Effects::default(), &clock)
            .detach();

        clock.advance(Duration::from_millis(4_999));
        assert_eq!(alert.style("opacity"), None);

        clock.advance(Duration::from_millis(1));
        assert_eq!(alert.style("opacity").as_deref(), Some("0"));
        assert_eq!(alert.style("transform").as_deref(), Some("translateY(-10px)"));
        assert_eq!(alert.style("display"), None);

        clock.advance(Duration::from_millis(299));
        assert_eq!(alert.style("display"), None);
        clock.advance(Duration::from_millis(1));
        assert_eq!(alert.style("display").as_deref(), Some("none"));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn each_alert_runs_its_own_timers() {
        let clock = ManualScheduler::new();
        let alerts: Vec<_> = (0..3).map(|_| FakeElement::attached()).collect();
        for alert in &alerts {
            schedule_dismissal(alert.clone(), &Timings::default(), &Effects::default(), &clock)
                .detach();
        }
        assert_eq!(clock.pending(), 3);
        clock.advance(Duration::from_millis(5_300));
        assert!(
            alerts
                .iter()
                .all(|alert| alert.style("display").as_deref() == Some("none"))
        );
    }

    #[test]
    fn detached_alert_is_handled_without_error() {
        let clock = ManualScheduler::new();
        let alert = FakeElement::attached();
        schedule_dismissal(alert.clone(), &Timings::default(), &Effects::default(), &clock)
            .detach();
        alert.detach();
        clock.advance(Duration::from_millis(5_300));
        assert!(!alert.is_attached());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancelling_before_fade_prevents_both_stages() {
        let clock = ManualScheduler::new();
        let alert = FakeElement::attached();
        let handle =
            schedule_dismissal(alert.clone(), &Timings::default(), &Effects::default(), &clock);
        clock.advance(Duration::from_millis(1_000));
        handle.cancel();
        clock.advance(Duration::from_secs(10));
        assert_eq!(alert.style("opacity"), None);
        assert_eq!(alert.style("display"), None);
    }
}
