use folio_core::content::ListSlice;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::common::{content_area, put, render_heading, render_text, truncate_str, wrapped_lines, HEADING_ROWS};
use crate::app::App;

/// Projects and experience entries
pub struct ListWidget;

impl ListWidget {
    pub fn height(slice: &ListSlice, width: u16) -> u16 {
        let inner = content_area(Rect::new(0, 0, width, 0)).width;
        let items: u16 = slice.items.iter().map(|e| entry_rows(e, inner)).sum();
        HEADING_ROWS + heading_rows(slice) + items.max(1) + 1
    }

    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        slice: &ListSlice,
        number: &str,
        title: &str,
        app: &App,
    ) {
        let theme = &app.theme;
        let inner = content_area(area);
        render_heading(buf, inner, number, title, theme, 0);

        let mut y = inner.y + HEADING_ROWS;
        if !slice.heading.is_empty() {
            put(buf, inner.x, y, &slice.heading, Style::default().fg(theme.grey1));
            y += 2;
        }

        if slice.items.is_empty() {
            put(buf, inner.x, y, "Nothing here yet.", Style::default().fg(theme.grey0));
            return;
        }

        for entry in &slice.items {
            let rows = entry_rows(entry, inner.width);
            put(buf, inner.x, y, "▸ ", Style::default().fg(theme.accent));
            put(
                buf,
                inner.x + 2,
                y,
                &entry.title,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            );
            let desc_rows = wrapped_lines(&entry.description, inner.width.saturating_sub(2));
            if desc_rows > 0 {
                render_text(
                    buf,
                    Rect::new(inner.x + 2, y + 1, inner.width.saturating_sub(2), desc_rows)
                        .intersection(buf.area),
                    &entry.description,
                    Style::default().fg(theme.grey1),
                );
            }
            if let Some(link) = &entry.link {
                put(
                    buf,
                    inner.x + 2,
                    y + 1 + desc_rows,
                    truncate_str(link.as_str(), inner.width.saturating_sub(2) as usize),
                    Style::default().fg(theme.accent_dim).add_modifier(Modifier::UNDERLINED),
                );
            }
            y += rows;
        }
    }
}

fn heading_rows(slice: &ListSlice) -> u16 {
    if slice.heading.is_empty() {
        0
    } else {
        2
    }
}

fn entry_rows(entry: &folio_core::content::ListEntry, width: u16) -> u16 {
    let link = u16::from(entry.link.is_some());
    1 + wrapped_lines(&entry.description, width.saturating_sub(2)) + link + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::ListEntry;

    #[test]
    fn test_height_grows_with_entries() {
        let mut slice = ListSlice::default();
        let empty = ListWidget::height(&slice, 100);
        slice.items.push(ListEntry {
            title: "Compiler".into(),
            description: "A small compiler".into(),
            link: None,
        });
        // Title, one description line, gap
        assert_eq!(ListWidget::height(&slice, 100), empty - 1 + 3);
    }
}
