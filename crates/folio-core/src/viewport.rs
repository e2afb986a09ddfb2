//! Layout measurements consumed by the navigation tracker
//!
//! The tracker never reads layout directly; it asks a [`ViewportMetrics`]
//! provider. The terminal preview implements it over its page layout and
//! tests use [`StaticViewport`].

/// Vertical extent of one rendered page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// Slice type of the section, e.g. `hero` or `about_me`
    pub tag: String,
    /// Document-relative top offset
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(tag: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            tag: tag.into(),
            top,
            height,
        }
    }

    /// Vertical center. Zero-height sections center on their top.
    #[inline]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Live layout measurements
pub trait ViewportMetrics {
    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn viewport_width(&self) -> f64;

    /// Sections in document order
    fn sections(&self) -> Vec<SectionBounds>;

    /// Find a section by its slice type
    fn section(&self, tag: &str) -> Option<SectionBounds> {
        self.sections().into_iter().find(|s| s.tag == tag)
    }
}

/// Fixed measurements, for tests and offline probing
#[derive(Debug, Clone, Default)]
pub struct StaticViewport {
    pub scroll_y: f64,
    pub height: f64,
    pub width: f64,
    pub sections: Vec<SectionBounds>,
}

impl StaticViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            height,
            width,
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: Vec<SectionBounds>) -> Self {
        self.sections = sections;
        self
    }

    /// Stack sections of the given heights from offset zero
    pub fn stacked<'a>(
        width: f64,
        height: f64,
        sections: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Self {
        let mut top = 0.0;
        let bounds = sections
            .into_iter()
            .map(|(tag, h)| {
                let bounds = SectionBounds::new(tag, top, h);
                top += h;
                bounds
            })
            .collect();
        Self::new(width, height).with_sections(bounds)
    }

    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self) -> f64 {
        let bottom = self
            .sections
            .iter()
            .map(SectionBounds::bottom)
            .fold(0.0, f64::max);
        (bottom - self.height).max(0.0)
    }
}

impl ViewportMetrics for StaticViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.sections.clone()
    }
}

/// Whether a viewport of `width` falls under a responsive breakpoint
#[inline]
pub fn is_compact(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_sections() {
        let vp = StaticViewport::stacked(1280.0, 800.0, [("hero", 800.0), ("blog", 600.0)]);
        assert_eq!(vp.sections[1].top, 800.0);
        assert_eq!(vp.sections[1].center(), 1100.0);
        assert_eq!(vp.max_scroll(), 600.0);
        assert_eq!(vp.section("blog").map(|s| s.height), Some(600.0));
        assert!(vp.section("contact").is_none());
    }

    #[test]
    fn test_zero_height_center_is_top() {
        let s = SectionBounds::new("x", 42.0, 0.0);
        assert_eq!(s.center(), 42.0);
    }

    #[test]
    fn test_breakpoints() {
        assert!(is_compact(767.0, 768.0));
        assert!(!is_compact(768.0, 768.0));
    }
}
