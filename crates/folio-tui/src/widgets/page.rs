use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};

use super::grid::render_grid;
use super::{render_section, NavbarWidget, PopupWidget, SectionHits, StatusBarWidget};
use crate::app::{App, Hitboxes, Mode};

/// Screen regions: optional top navbar, page content, optional tab bar, status
struct Regions {
    navbar: Option<Rect>,
    content: Rect,
    tabs: Option<Rect>,
    status: Rect,
}

fn regions(area: Rect, compact: bool) -> Regions {
    let status = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1.min(area.height));
    let content_h = area.height.saturating_sub(2);
    if compact {
        Regions {
            navbar: None,
            content: Rect::new(area.x, area.y, area.width, content_h),
            tabs: Some(Rect::new(area.x, area.y + content_h, area.width, 1.min(area.height))),
            status,
        }
    } else {
        Regions {
            navbar: Some(Rect::new(area.x, area.y, area.width, 1.min(area.height))),
            content: Rect::new(area.x, area.y + 1.min(area.height), area.width, content_h),
            tabs: None,
            status,
        }
    }
}

/// Draw one frame and record where the clickable things ended up
pub fn draw(frame: &mut Frame, app: &mut App) {
    let hitboxes = render(frame, app);
    app.hitboxes = hitboxes;
}

fn render(frame: &mut Frame, app: &App) -> Hitboxes {
    let area = frame.area();
    let theme = &app.theme;
    let mut hits = Hitboxes::default();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);
    if area.height < 3 || area.width < 10 {
        return hits;
    }

    let regions = regions(area, app.is_nav_compact());
    let content = regions.content;
    let scroll = app.layout.scroll;

    for slot in app.layout.visible_slots() {
        let Some(slice) = app.content.slices.get(slot.slice_index) else {
            continue;
        };
        let section_area = Rect::new(0, 0, content.width, slot.height);
        let mut section = Buffer::empty(section_area);
        section.set_style(section_area, Style::default().bg(theme.bg0));
        let section_hits = render_section(&mut section, section_area, slice, app);

        let first = slot.top.max(scroll);
        let last = slot.bottom().min(scroll.saturating_add(content.height));
        let buf = frame.buffer_mut();
        for row in first..last {
            let src_y = row - slot.top;
            let dst_y = content.y + (row - scroll);
            for x in 0..content.width {
                if let (Some(src), Some(dst)) =
                    (section.cell((x, src_y)), buf.cell_mut((content.x + x, dst_y)))
                {
                    *dst = src.clone();
                }
            }
        }

        let offset = content.y as i32 + slot.top as i32 - scroll as i32;
        collect_hits(&mut hits, section_hits, content, offset);
    }

    if app.config.ui.grid_overlay {
        let lines = app
            .grid
            .lines(content.width as f64, content.height as f64, scroll as f64);
        render_grid(frame.buffer_mut(), content, &lines, Style::default().fg(theme.grid));
    }

    if let Some(navbar) = regions.navbar {
        hits.nav = NavbarWidget::render_top(frame, navbar, app);
    }
    if let Some(tabs) = regions.tabs {
        hits.nav = NavbarWidget::render_tabs(frame, tabs, app);
    }
    StatusBarWidget::render(frame, regions.status, app);

    if let Some(toast) = app.toasts.latest(app.now) {
        PopupWidget::render_toast(frame, toast, theme);
    }
    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, theme);
    }

    hits
}

/// Move section-relative rects to the screen and clip them to the content area
fn place(rect: Rect, content: Rect, offset: i32) -> Option<Rect> {
    let top = (rect.y as i32 + offset).max(content.y as i32);
    let bottom = (rect.y as i32 + rect.height as i32 + offset).min(content.bottom() as i32);
    if bottom <= top || rect.width == 0 {
        return None;
    }
    Some(Rect::new(content.x + rect.x, top as u16, rect.width, (bottom - top) as u16))
}

fn collect_hits(hits: &mut Hitboxes, section: SectionHits, content: Rect, offset: i32) {
    hits.cards.extend(
        section
            .cards
            .into_iter()
            .filter_map(|(rect, i)| place(rect, content, offset).map(|r| (r, i))),
    );
    hits.dots.extend(
        section
            .dots
            .into_iter()
            .filter_map(|(rect, i)| place(rect, content, offset).map(|r| (r, i))),
    );
    hits.fields.extend(
        section
            .fields
            .into_iter()
            .filter_map(|(rect, f)| place(rect, content, offset).map(|r| (r, f))),
    );
    if let Some(stage) = section.stage.and_then(|s| place(s, content, offset)) {
        hits.stage = Some(stage);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use folio_core::content::{ContentSource, EmbeddedContentSource};
    use folio_core::nav::NavTarget;
    use folio_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn app(width: u16) -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let content = EmbeddedContentSource.load().unwrap();
        App::new(Arc::new(config), content, width, 40, Duration::ZERO).unwrap()
    }

    fn frame(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(app.width, app.height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    #[test]
    fn test_draw_records_nav_hitboxes() {
        let mut app = app(120);
        frame(&mut app);
        let targets: Vec<_> = app.hitboxes.nav.iter().map(|(_, t)| *t).collect();
        assert!(targets.contains(&NavTarget::Contact));
        assert!(app.hitboxes.nav.iter().all(|(r, _)| r.y == 0));
        // The blog is below the fold
        assert!(app.hitboxes.cards.is_empty());
    }

    #[test]
    fn test_blog_section_exposes_cards_and_dots() {
        let mut app = app(120);
        app.navigate(NavTarget::Blogs);
        app.tick(Duration::from_millis(1));
        frame(&mut app);

        assert_eq!(app.hitboxes.dots.len(), app.carousel.item_count());
        // Left, centre and right; the centre card is drawn last
        assert_eq!(app.hitboxes.cards.len(), 3);
        assert_eq!(app.hitboxes.cards.last().map(|(_, i)| *i), Some(0));
        assert!(app.hitboxes.stage.is_some());
    }

    #[test]
    fn test_compact_layout_uses_tab_bar() {
        let mut app = app(70);
        frame(&mut app);
        assert_eq!(app.hitboxes.nav.len(), 4);
        assert!(app.hitboxes.nav.iter().all(|(r, _)| r.y == 38));
    }

    #[test]
    fn test_place_clips_to_content() {
        let content = Rect::new(0, 1, 80, 20);
        // Section starts 5 rows above the viewport
        let r = place(Rect::new(2, 3, 10, 4), content, 1 - 5).unwrap();
        assert_eq!(r, Rect::new(2, 1, 10, 2));
        assert!(place(Rect::new(2, 0, 10, 3), content, 1 - 5).is_none());
        let r = place(Rect::new(0, 18, 10, 5), content, 1).unwrap();
        assert_eq!(r.bottom(), content.bottom());
    }

    #[test]
    fn test_regions_keep_two_chrome_rows() {
        let area = Rect::new(0, 0, 120, 40);
        let wide = regions(area, false);
        assert_eq!(wide.content, Rect::new(0, 1, 120, 38));
        assert!(wide.tabs.is_none());

        let narrow = regions(area, true);
        assert_eq!(narrow.content, Rect::new(0, 0, 120, 38));
        assert_eq!(narrow.tabs, Some(Rect::new(0, 38, 120, 1)));
        assert_eq!(narrow.status.y, 39);
    }
}
