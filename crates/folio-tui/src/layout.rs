use folio_core::viewport::{SectionBounds, ViewportMetrics};

/// One section placed on the page, in rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot {
    pub tag: String,
    /// Index of the slice in the page content
    pub slice_index: usize,
    pub top: u16,
    pub height: u16,
}

impl SectionSlot {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Vertical layout of the whole page for the current terminal size
///
/// Every section is at least one viewport tall, stacked top to bottom.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub width: u16,
    /// Rows available for page content
    pub viewport_rows: u16,
    /// Top row currently on screen
    pub scroll: u16,
    pub slots: Vec<SectionSlot>,
}

impl PageLayout {
    /// `sections` yields `(tag, slice_index, natural_height)` in page order
    pub fn compute<'a>(
        sections: impl IntoIterator<Item = (&'a str, usize, u16)>,
        width: u16,
        viewport_rows: u16,
    ) -> Self {
        let mut top: u16 = 0;
        let slots = sections
            .into_iter()
            .map(|(tag, slice_index, natural)| {
                let height = natural.max(viewport_rows).max(1);
                let slot = SectionSlot {
                    tag: tag.to_string(),
                    slice_index,
                    top,
                    height,
                };
                top = top.saturating_add(height);
                slot
            })
            .collect();

        Self {
            width,
            viewport_rows,
            scroll: 0,
            slots,
        }
    }

    pub fn total_height(&self) -> u16 {
        self.slots.last().map(SectionSlot::bottom).unwrap_or(0)
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_rows)
    }

    pub fn slot(&self, tag: &str) -> Option<&SectionSlot> {
        self.slots.iter().find(|s| s.tag == tag)
    }

    /// Section under a page row
    pub fn slot_at(&self, row: u16) -> Option<&SectionSlot> {
        self.slots.iter().find(|s| s.contains(row))
    }

    /// Sections intersecting the visible rows
    pub fn visible_slots(&self) -> impl Iterator<Item = &SectionSlot> {
        let top = self.scroll;
        let bottom = self.scroll.saturating_add(self.viewport_rows);
        self.slots
            .iter()
            .filter(move |s| s.top < bottom && s.bottom() > top)
    }
}

impl ViewportMetrics for PageLayout {
    fn scroll_y(&self) -> f64 {
        self.scroll as f64
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_rows as f64
    }

    fn viewport_width(&self) -> f64 {
        self.width as f64
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.slots
            .iter()
            .map(|s| SectionBounds::new(s.tag.clone(), s.top as f64, s.height as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::nav::{detect_active_section, NavTarget};

    fn layout() -> PageLayout {
        PageLayout::compute(
            [("hero", 0, 10), ("about_me", 1, 60), ("blog", 2, 20)],
            120,
            30,
        )
    }

    #[test]
    fn test_sections_fill_at_least_one_viewport() {
        let layout = layout();
        let heights: Vec<_> = layout.slots.iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![30, 60, 30]);
        let tops: Vec<_> = layout.slots.iter().map(|s| s.top).collect();
        assert_eq!(tops, vec![0, 30, 90]);
        assert_eq!(layout.total_height(), 120);
        assert_eq!(layout.max_scroll(), 90);
    }

    #[test]
    fn test_visible_slots_follow_scroll() {
        let mut layout = layout();
        layout.scroll = 80;
        let tags: Vec<_> = layout.visible_slots().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, vec!["about_me", "blog"]);
        assert_eq!(layout.slot_at(95).map(|s| s.tag.as_str()), Some("blog"));
        assert!(layout.slot_at(500).is_none());
    }

    #[test]
    fn test_metrics_drive_detection() {
        let mut layout = layout();
        layout.scroll = 45;
        // probe = 45 + 10 = 55, about_me center = 60
        let target = detect_active_section(
            layout.scroll_y(),
            layout.viewport_height(),
            &layout.sections(),
        );
        assert_eq!(target, NavTarget::About);
        assert_eq!(layout.section("blog").map(|s| s.top), Some(90.0));
    }

    #[test]
    fn test_empty_page() {
        let layout = PageLayout::compute(std::iter::empty(), 80, 24);
        assert_eq!(layout.total_height(), 0);
        assert_eq!(layout.max_scroll(), 0);
        assert_eq!(layout.visible_slots().count(), 0);
    }
}
