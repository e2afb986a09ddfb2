use std::time::Duration;

/// Repeating timer driven by explicit `now` values
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
    active: bool,
}

impl Interval {
    /// Start an interval whose first firing is one period after `start`
    pub fn new(period: Duration, start: Duration) -> Self {
        Self {
            period,
            next_due: start + period,
            active: !period.is_zero(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of periods that elapsed since the last poll
    pub fn poll(&mut self, now: Duration) -> u32 {
        if !self.active || now < self.next_due {
            return 0;
        }
        let overdue = now - self.next_due;
        let fired = 1 + (overdue.as_nanos() / self.period.as_nanos()) as u32;
        self.next_due += self.period * fired;
        fired
    }

    /// Stop the interval. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_each_period() {
        let mut iv = Interval::new(ms(100), ms(0));
        assert_eq!(iv.poll(ms(99)), 0);
        assert_eq!(iv.poll(ms(100)), 1);
        assert_eq!(iv.poll(ms(150)), 0);
        assert_eq!(iv.poll(ms(200)), 1);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let mut iv = Interval::new(ms(100), ms(0));
        assert_eq!(iv.poll(ms(350)), 3);
        assert_eq!(iv.poll(ms(399)), 0);
        assert_eq!(iv.poll(ms(400)), 1);
    }

    #[test]
    fn test_cancelled_interval_never_fires() {
        let mut iv = Interval::new(ms(100), ms(0));
        iv.cancel();
        iv.cancel();
        assert_eq!(iv.poll(ms(1000)), 0);
        assert!(!iv.is_active());
    }

    #[test]
    fn test_zero_period_is_inactive() {
        let mut iv = Interval::new(Duration::ZERO, ms(0));
        assert_eq!(iv.poll(ms(10)), 0);
    }
}
