use folio_core::nav::NavTarget;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Top navbar on wide terminals, bottom tab bar on narrow ones
pub struct NavbarWidget;

impl NavbarWidget {
    /// Top row: logo plus the full link list unless compact
    pub fn render_top(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, NavTarget)> {
        let theme = &app.theme;
        let logo = app
            .content
            .navbar()
            .map(|n| n.logotext.clone())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| app.content.meta.meta_title.clone());

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(theme.bg1)),
            Span::styled(
                logo.clone(),
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.bg1)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        let mut hits = Vec::new();

        if !app.is_nav_compact() {
            let labels: Vec<String> = app
                .visible_nav_items()
                .iter()
                .map(|item| format!(" {} ", item.label))
                .collect();
            let links_width: u16 = labels.iter().map(|l| l.width() as u16 + 1).sum();
            let used = 1 + logo.width() as u16;
            let gap = area.width.saturating_sub(used + links_width);
            spans.push(Span::styled(" ".repeat(gap as usize), Style::default().bg(theme.bg1)));

            let mut x = area.x + used + gap;
            let active = app.active_section();
            for (item, label) in app.visible_nav_items().into_iter().zip(labels) {
                let w = label.width() as u16;
                let style = if item.is_active(active) {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.bg1)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.grey1).bg(theme.bg1)
                };
                spans.push(Span::styled(label, style));
                spans.push(Span::styled(" ", Style::default().bg(theme.bg1)));
                if item.is_section_link() {
                    hits.push((Rect::new(x, area.y, w, 1).intersection(area), item.target));
                }
                x += w + 1;
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1)),
            area,
        );
        hits
    }

    /// Evenly spaced tabs for the compact layout
    pub fn render_tabs(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, NavTarget)> {
        let theme = &app.theme;
        let items = app.visible_nav_items();
        let mut hits = Vec::new();
        if items.is_empty() || area.width == 0 {
            return hits;
        }

        let slot = area.width / items.len() as u16;
        let active = app.active_section();
        let mut spans = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let label = super::common::truncate_str(&item.label, slot.saturating_sub(2) as usize);
            let pad = slot.saturating_sub(label.width() as u16);
            let text = format!(
                "{}{}{}",
                " ".repeat((pad / 2) as usize),
                label,
                " ".repeat((pad - pad / 2) as usize)
            );
            let style = if item.is_active(active) {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.grey1).bg(theme.bg1)
            };
            spans.push(Span::styled(text, style));
            hits.push((Rect::new(area.x + i as u16 * slot, area.y, slot, 1), item.target));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1)),
            area,
        );
        hits
    }
}
