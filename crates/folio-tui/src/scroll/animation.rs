//! Scroll animation controller for the page view

use std::time::Duration;

use super::config::ScrollConfigExt;
use super::timing::{is_complete, lerp_u16, progress};
use folio_core::animation::EasingTypeExt;
use folio_core::{EasingType, ScrollConfig};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Duration,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Animates the page's top row towards a target
///
/// Relative scrolls are batched until the next [`update`](Self::update) so a
/// burst of key repeats becomes one animation. Absolute jumps (navbar clicks)
/// start immediately.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: u16,
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame may move the page
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Where the page ends up once the running animation finishes
    pub fn target(&self) -> u16 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Move without animating
    pub fn set(&mut self, row: u16) {
        self.animation = None;
        self.pending_delta = 0;
        self.current = row;
    }

    /// Animate to an absolute row starting at `now`
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Duration) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() || target == self.current {
            self.set(target);
            return;
        }

        self.start(target, now);
    }

    /// Queue a relative move, positive is down
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if self.config.is_smooth() {
            self.pending_delta += delta;
        } else {
            let row = (self.current as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set(row);
        }
    }

    pub fn line_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.config.step_rows(), max_scroll);
    }

    pub fn line_up(&mut self, max_scroll: u16) {
        self.scroll_by(-self.config.step_rows(), max_scroll);
    }

    pub fn half_page_down(&mut self, viewport_rows: u16, max_scroll: u16) {
        self.scroll_by((viewport_rows / 2).max(1) as i32, max_scroll);
    }

    pub fn half_page_up(&mut self, viewport_rows: u16, max_scroll: u16) {
        self.scroll_by(-((viewport_rows / 2).max(1) as i32), max_scroll);
    }

    pub fn page_down(&mut self, viewport_rows: u16, max_scroll: u16) {
        self.scroll_by(viewport_rows.max(1) as i32, max_scroll);
    }

    pub fn page_up(&mut self, viewport_rows: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_rows.max(1) as i32), max_scroll);
    }

    /// Advance to `now` and return the row to draw from
    pub fn update(&mut self, now: Duration, max_scroll: u16) -> u16 {
        if self.pending_delta != 0 {
            let target = (self.target() as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;
            if target != self.current {
                self.start(target, now);
            } else {
                self.animation = None;
            }
        }

        if let Some(anim) = &self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, now, anim.duration));
                self.current = lerp_u16(anim.from, anim.to, t);
            }
        }

        self.current = self.current.min(max_scroll);
        self.current
    }

    /// Stop where the page is now
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }

    fn start(&mut self, to: u16, now: Duration) {
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }
}
