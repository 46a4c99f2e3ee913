use std::time::{Duration, Instant};

/// Cancellable repeating schedule.
///
/// Holds no thread or callback: the owner asks it whether a firing is due
/// and sleeps for `time_until_fire` in between.
#[derive(Debug, Clone, Default)]
pub struct RepeatingTimer {
    period: Option<Duration>,
    next_fire: Option<Instant>,
}

impl RepeatingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) firing every `period`, first one at `now + period`.
    pub fn arm(&mut self, period: Duration, now: Instant) {
        self.period = Some(period);
        self.next_fire = Some(now + period);
    }

    pub fn disarm(&mut self) {
        self.period = None;
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.period.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.next_fire.map(|at| at.saturating_duration_since(now))
    }

    /// Returns true at most once per period. A late poll does not queue up
    /// missed firings, the next one is scheduled a full period after `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match (self.period, self.next_fire) {
            (Some(period), Some(at)) if at <= now => {
                let next = at + period;
                self.next_fire = Some(if next > now { next } else { now + period });
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn test_unarmed_never_fires() {
        let mut timer = RepeatingTimer::new();
        let now = Instant::now();

        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(now + Duration::from_secs(10)));
        assert_eq!(timer.time_until_fire(now), None);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = RepeatingTimer::new();
        let t0 = Instant::now();
        timer.arm(MS_100, t0);

        assert!(!timer.fire_if_due(t0 + Duration::from_millis(99)));
        assert!(timer.fire_if_due(t0 + MS_100));
        assert!(!timer.fire_if_due(t0 + MS_100));
        assert!(timer.fire_if_due(t0 + Duration::from_millis(200)));
        assert_eq!(timer.time_until_fire(t0 + Duration::from_millis(250)), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let mut timer = RepeatingTimer::new();
        let t0 = Instant::now();
        timer.arm(MS_100, t0);

        let late = t0 + Duration::from_millis(1000);
        assert!(timer.fire_if_due(late));
        assert!(!timer.fire_if_due(late));
        assert_eq!(timer.time_until_fire(late), Some(MS_100));
    }

    #[test]
    fn test_rearm_and_disarm() {
        let mut timer = RepeatingTimer::new();
        let t0 = Instant::now();
        timer.arm(MS_100, t0);

        let t1 = t0 + Duration::from_millis(50);
        timer.arm(Duration::from_millis(70), t1);
        assert_eq!(timer.period(), Some(Duration::from_millis(70)));
        assert!(!timer.fire_if_due(t0 + MS_100));
        assert!(timer.fire_if_due(t1 + Duration::from_millis(70)));

        timer.disarm();
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(t1 + Duration::from_secs(5)));
    }
}
