use std::time::Duration;

use tracing::debug;

use super::NavTarget;
use crate::config::TrackerConfig;
use crate::scheduler::Debouncer;
use crate::viewport::{SectionBounds, ViewportMetrics};

/// Map a scroll position to the nav target of the closest section
///
/// The probe sits a third of the way down the viewport. Near the top of the
/// page (probe above half the viewport height) the answer is always home.
/// Otherwise the section whose center is nearest the probe wins; on an exact
/// tie the earlier section is kept.
pub fn detect_active_section(
    scroll_y: f64,
    viewport_height: f64,
    sections: &[SectionBounds],
) -> NavTarget {
    let probe = scroll_y + viewport_height / 3.0;

    if probe < viewport_height / 2.0 {
        return NavTarget::Home;
    }

    let mut closest: Option<&SectionBounds> = None;
    let mut min_distance = f64::INFINITY;

    for section in sections {
        let distance = (probe - section.center()).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = Some(section);
        }
    }

    closest
        .map(|s| NavTarget::from_section_tag(&s.tag))
        .unwrap_or_default()
}

/// Publishes the nav target of the section currently in view
///
/// Scroll events only arm a debouncer; the recompute happens in
/// [`poll`](Self::poll) once scrolling has been quiet for the configured
/// delay. Mounting computes immediately.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    active: NavTarget,
    debounce: Debouncer,
    nav_offset: f64,
    mounted: bool,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

impl ActiveSectionTracker {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            active: NavTarget::Home,
            debounce: Debouncer::new(config.debounce()),
            nav_offset: config.nav_offset,
            mounted: false,
        }
    }

    /// Currently published target
    #[inline]
    pub fn active(&self) -> NavTarget {
        self.active
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a debounced recompute is waiting
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Start tracking and compute the active section right away
    pub fn mount(&mut self, metrics: &impl ViewportMetrics) -> NavTarget {
        self.mounted = true;
        self.debounce.cancel();
        self.recompute(metrics);
        self.active
    }

    /// Stop tracking. Pending recomputes are dropped and later events ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.debounce.cancel();
    }

    /// Record a user scroll at `now`
    pub fn on_scroll(&mut self, now: Duration) {
        if self.mounted {
            self.debounce.trigger(now);
        }
    }

    /// Run the debounced recompute if it is due.
    /// Returns the new target when the active section changed.
    pub fn poll(&mut self, now: Duration, metrics: &impl ViewportMetrics) -> Option<NavTarget> {
        if !self.mounted || !self.debounce.poll(now) {
            return None;
        }
        let previous = self.active;
        self.recompute(metrics);
        (self.active != previous).then_some(self.active)
    }

    /// Handle a navigation request from the navbar
    ///
    /// Sets the active target directly and returns the scroll offset to move
    /// to. Returns `None` and leaves state alone when the target section is
    /// not on the page.
    pub fn navigate_to(&mut self, target: NavTarget, metrics: &impl ViewportMetrics) -> Option<f64> {
        let offset = if target == NavTarget::Home {
            0.0
        } else {
            let section = metrics.section(target.section_tag())?;
            (section.top - self.nav_offset).max(0.0)
        };

        self.debounce.cancel();
        if self.active != target {
            debug!(from = %self.active, to = %target, offset, "Navigating to section");
        }
        self.active = target;
        Some(offset)
    }

    fn recompute(&mut self, metrics: &impl ViewportMetrics) {
        let next = detect_active_section(
            metrics.scroll_y(),
            metrics.viewport_height(),
            &metrics.sections(),
        );
        if next != self.active {
            debug!(from = %self.active, to = %next, scroll_y = metrics.scroll_y(), "Active section changed");
            self.active = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Clock, ManualClock};
    use crate::viewport::StaticViewport;

    const VH: f64 = 900.0;

    fn page() -> StaticViewport {
        StaticViewport::stacked(
            1280.0,
            VH,
            [
                ("hero", 900.0),
                ("about_me", 1200.0),
                ("services", 800.0),
                ("blog", 900.0),
                ("contact", 900.0),
            ],
        )
    }

    #[test]
    fn test_top_of_page_is_home() {
        let sections = page().sections;
        // probe = s + 300 < 450
        for s in 0..150 {
            assert_eq!(detect_active_section(s as f64, VH, &sections), NavTarget::Home);
        }
    }

    #[test]
    fn test_probe_threshold_is_half_viewport() {
        let sections = vec![SectionBounds::new("about_me", 0.0, 1000.0)];
        // probe = 149 + 300 = 449 → home regardless of sections
        assert_eq!(detect_active_section(149.0, VH, &sections), NavTarget::Home);
        // probe = 150 + 300 = 450 → distance rule applies
        assert_eq!(detect_active_section(150.0, VH, &sections), NavTarget::About);
    }

    #[test]
    fn test_closest_center_wins() {
        let sections = page().sections;
        // about_me center = 900 + 600 = 1500; probe = 1200 + 300
        assert_eq!(detect_active_section(1200.0, VH, &sections), NavTarget::About);
        // blog center = 2900 + 450 = 3350
        assert_eq!(detect_active_section(3050.0, VH, &sections), NavTarget::Blogs);
        // contact center = 4250
        assert_eq!(detect_active_section(10_000.0, VH, &sections), NavTarget::Contact);
    }

    #[test]
    fn test_exactly_one_target_for_any_offset() {
        let sections = page().sections;
        for s in (0..5000).step_by(37) {
            let target = detect_active_section(s as f64, VH, &sections);
            let matching = NavTarget::ALL.iter().filter(|t| **t == target).count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn test_tie_keeps_first_section() {
        // probe = 600; both centers are 100 away
        let sections = vec![
            SectionBounds::new("services", 400.0, 200.0),
            SectionBounds::new("blog", 600.0, 200.0),
        ];
        assert_eq!(detect_active_section(300.0, VH, &sections), NavTarget::Services);
    }

    #[test]
    fn test_unmapped_tag_falls_back_to_home() {
        let sections = vec![SectionBounds::new("testimonials", 1000.0, 500.0)];
        assert_eq!(detect_active_section(1000.0, VH, &sections), NavTarget::Home);
    }

    #[test]
    fn test_no_sections_stays_home() {
        assert_eq!(detect_active_section(5000.0, VH, &[]), NavTarget::Home);
    }

    #[test]
    fn test_zero_height_sections_compare_on_top() {
        let sections = vec![
            SectionBounds::new("projects", 1000.0, 0.0),
            SectionBounds::new("contact", 2000.0, 0.0),
        ];
        // probe = 1900 → contact top at 2000 is closer
        assert_eq!(detect_active_section(1600.0, VH, &sections), NavTarget::Contact);
    }

    #[test]
    fn test_mount_computes_immediately() {
        let mut tracker = ActiveSectionTracker::default();
        let vp = page().scrolled_to(1200.0);
        assert_eq!(tracker.mount(&vp), NavTarget::About);
        assert!(tracker.is_mounted());
    }

    #[test]
    fn test_scroll_is_debounced() {
        let clock = ManualClock::new();
        let mut tracker = ActiveSectionTracker::default();
        tracker.mount(&page());

        let vp = page().scrolled_to(1200.0);
        tracker.on_scroll(clock.now());
        clock.advance_ms(30);
        assert_eq!(tracker.poll(clock.now(), &vp), None);
        assert_eq!(tracker.active(), NavTarget::Home);

        // Another event restarts the quiet period
        tracker.on_scroll(clock.now());
        clock.advance_ms(49);
        assert_eq!(tracker.poll(clock.now(), &vp), None);
        clock.advance_ms(1);
        assert_eq!(tracker.poll(clock.now(), &vp), Some(NavTarget::About));
        assert_eq!(tracker.active(), NavTarget::About);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn test_poll_reports_only_changes() {
        let clock = ManualClock::new();
        let mut tracker = ActiveSectionTracker::default();
        let vp = page().scrolled_to(1200.0);
        tracker.mount(&vp);

        tracker.on_scroll(clock.now());
        clock.advance_ms(100);
        assert_eq!(tracker.poll(clock.now(), &vp), None);
        assert_eq!(tracker.active(), NavTarget::About);
    }

    #[test]
    fn test_unmount_drops_pending_and_ignores_events() {
        let clock = ManualClock::new();
        let mut tracker = ActiveSectionTracker::default();
        tracker.mount(&page());
        tracker.on_scroll(clock.now());
        tracker.unmount();
        tracker.unmount();

        let vp = page().scrolled_to(3000.0);
        clock.advance_ms(500);
        assert_eq!(tracker.poll(clock.now(), &vp), None);
        tracker.on_scroll(clock.now());
        assert!(!tracker.has_pending());
        assert_eq!(tracker.active(), NavTarget::Home);
    }

    #[test]
    fn test_events_before_mount_are_ignored() {
        let mut tracker = ActiveSectionTracker::default();
        tracker.on_scroll(Duration::ZERO);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn test_navigate_sets_active_and_offsets_scroll() {
        let mut tracker = ActiveSectionTracker::default();
        let vp = page();
        tracker.mount(&vp);

        // blog top = 2900
        assert_eq!(tracker.navigate_to(NavTarget::Blogs, &vp), Some(2800.0));
        assert_eq!(tracker.active(), NavTarget::Blogs);

        assert_eq!(tracker.navigate_to(NavTarget::Home, &vp), Some(0.0));
        assert_eq!(tracker.active(), NavTarget::Home);
    }

    #[test]
    fn test_navigate_clamps_to_page_top() {
        let mut tracker = ActiveSectionTracker::default();
        let vp = StaticViewport::stacked(1280.0, VH, [("about_me", 900.0)]);
        assert_eq!(tracker.navigate_to(NavTarget::About, &vp), Some(0.0));
    }

    #[test]
    fn test_navigate_to_missing_section_is_ignored() {
        let mut tracker = ActiveSectionTracker::default();
        let vp = page();
        tracker.mount(&vp);
        assert_eq!(tracker.navigate_to(NavTarget::Exp, &vp), None);
        assert_eq!(tracker.active(), NavTarget::Home);
    }

    #[test]
    fn test_navigate_cancels_pending_recompute() {
        let clock = ManualClock::new();
        let mut tracker = ActiveSectionTracker::default();
        let vp = page();
        tracker.mount(&vp);

        tracker.on_scroll(clock.now());
        tracker.navigate_to(NavTarget::Contact, &vp);
        clock.advance_ms(100);
        // Still at scroll 0: a stale recompute would have reset to home
        assert_eq!(tracker.poll(clock.now(), &vp), None);
        assert_eq!(tracker.active(), NavTarget::Contact);
    }
}
