use std::time::Duration;

/// Coalesces bursts of events into a single firing after a quiet period
///
/// Each [`trigger`](Self::trigger) pushes the deadline out to `now + delay`;
/// [`poll`](Self::poll) fires once when the deadline has passed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an event, restarting the quiet period
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending firing. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time of the pending firing, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let mut d = Debouncer::new(ms(50));
        d.trigger(ms(0));
        assert!(!d.poll(ms(49)));
        assert!(d.poll(ms(50)));
        assert!(!d.poll(ms(100)));
    }

    #[test]
    fn test_burst_coalesces_into_one_firing() {
        let mut d = Debouncer::new(ms(50));
        for t in (0..200).step_by(10) {
            d.trigger(ms(t));
            assert!(!d.poll(ms(t)));
        }
        // Last trigger at 190ms
        assert!(!d.poll(ms(239)));
        assert!(d.poll(ms(240)));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut d = Debouncer::new(ms(50));
        d.trigger(ms(0));
        d.cancel();
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.poll(ms(1000)));
    }
}
