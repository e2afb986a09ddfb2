use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};

/// How many extra cycles a tween plays after the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

/// A single eased 0 → 1 animation, optionally repeated and mirrored
///
/// With `yoyo` every odd cycle runs backwards, so a blinking cursor is
/// `Tween::new(500ms).repeat(Repeat::Infinite).yoyo(true)`.
#[derive(Debug, Clone)]
pub struct Tween {
    duration: Duration,
    repeat: Repeat,
    yoyo: bool,
    easing: EasingType,
}

impl Tween {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            repeat: Repeat::Count(0),
            yoyo: false,
            easing: EasingType::Linear,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Total running time, `None` for infinite tweens
    pub fn total_duration(&self) -> Option<Duration> {
        match self.repeat {
            Repeat::Count(n) => Some(self.duration * (n + 1)),
            Repeat::Infinite => None,
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.total_duration().is_some_and(|total| elapsed >= total)
    }

    /// Eased progress in [0, 1] after `elapsed` time
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return self.end_value();
        }
        if self.is_finished(elapsed) {
            return self.end_value();
        }

        let cycle_len = self.duration.as_secs_f64();
        let position = elapsed.as_secs_f64() / cycle_len;
        let cycle = position.floor() as u64;
        let t = position - cycle as f64;

        let raw = if self.yoyo && cycle % 2 == 1 { 1.0 - t } else { t };
        self.easing.apply(raw)
    }

    /// Value a finished tween rests at: 0 after an odd yoyo cycle, 1 otherwise
    fn end_value(&self) -> f64 {
        match self.repeat {
            Repeat::Count(n) if self.yoyo && n % 2 == 1 => 0.0,
            _ => 1.0,
        }
    }
}
