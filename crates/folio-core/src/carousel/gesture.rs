/// Outcome of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next card
    Next,
    /// Finger moved right: show the previous card
    Prev,
}

/// Turns a horizontal drag into at most one next/prev per gesture
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start_x: f64,
    swiping: bool,
    threshold: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: 0.0,
            swiping: false,
            threshold,
        }
    }

    #[inline]
    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    /// Pointer went down at `x`
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        self.swiping = true;
    }

    /// Pointer moved to `x`. Fires once the net displacement exceeds the
    /// threshold, then ignores the rest of the gesture.
    pub fn update(&mut self, x: f64) -> Option<SwipeDirection> {
        if !self.swiping {
            return None;
        }
        let diff = self.start_x - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        self.swiping = false;
        Some(if diff > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Prev
        })
    }

    /// Pointer released
    pub fn end(&mut self) {
        self.swiping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftward_swipe_past_threshold_fires_next_once() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.update(180.0), None);
        assert_eq!(swipe.update(140.0), Some(SwipeDirection::Next));
        // Rest of the gesture is ignored
        assert_eq!(swipe.update(0.0), None);
        swipe.end();
        assert!(!swipe.is_swiping());
    }

    #[test]
    fn test_short_swipe_fires_nothing() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(200.0);
        assert_eq!(swipe.update(180.0), None);
        swipe.end();
        assert_eq!(swipe.update(0.0), None);
    }

    #[test]
    fn test_rightward_swipe_fires_prev() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(100.0);
        assert_eq!(swipe.update(151.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn test_exact_threshold_does_not_fire() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.begin(100.0);
        assert_eq!(swipe.update(50.0), None);
        assert!(swipe.is_swiping());
    }

    #[test]
    fn test_move_without_begin_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.update(500.0), None);
    }
}
