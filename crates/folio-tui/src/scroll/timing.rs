//! Progress helpers over clock readings

use std::time::Duration;

use folio_core::animation::lerp;

/// Fraction of `duration` elapsed between `start` and `now`, clamped to [0, 1]
#[inline]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Duration, now: Duration, duration: Duration) -> bool {
    now.saturating_sub(start) >= duration
}

/// Interpolate between two row offsets
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round().clamp(0.0, u16::MAX as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_progress() {
        let start = 100 * MS;
        assert_eq!(progress(start, start, 200 * MS), 0.0);
        assert!((progress(start, 200 * MS, 200 * MS) - 0.5).abs() < 1e-9);
        assert_eq!(progress(start, 900 * MS, 200 * MS), 1.0);
        // A clock reading before the start counts as no progress
        assert_eq!(progress(start, Duration::ZERO, 200 * MS), 0.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO, Duration::ZERO), 1.0);
        assert!(is_complete(Duration::ZERO, Duration::ZERO, Duration::ZERO));
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(10, 30, 0.0), 10);
        assert_eq!(lerp_u16(10, 30, 0.5), 20);
        assert_eq!(lerp_u16(30, 10, 1.0), 10);
    }
}
