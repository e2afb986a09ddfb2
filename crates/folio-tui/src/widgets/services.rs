use folio_core::content::{Service, ServiceKind, ServicesSlice};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::common::{content_area, put, render_heading, render_text, wrapped_lines, HEADING_ROWS};
use crate::app::App;

const CARD_MIN_WIDTH: u16 = 28;

pub struct ServicesWidget;

impl ServicesWidget {
    pub fn height(slice: &ServicesSlice, width: u16) -> u16 {
        let inner = content_area(Rect::new(0, 0, width, 0)).width;
        let (per_row, card_w) = grid(inner, slice.items.len());
        let rows: u16 = slice
            .items
            .chunks(per_row.max(1))
            .map(|row| row.iter().map(|s| card_height(s, card_w)).max().unwrap_or(0) + 1)
            .sum();
        HEADING_ROWS + 2 + rows + 1
    }

    pub fn render(buf: &mut Buffer, area: Rect, slice: &ServicesSlice, app: &App) {
        let theme = &app.theme;
        let inner = content_area(area);
        render_heading(buf, inner, "04", "SERVICES", theme, 0);
        put(
            buf,
            inner.x,
            inner.y + HEADING_ROWS,
            &slice.heading,
            Style::default().fg(theme.grey1),
        );

        let (per_row, card_w) = grid(inner.width, slice.items.len());
        let mut y = inner.y + HEADING_ROWS + 2;
        for row in slice.items.chunks(per_row.max(1)) {
            let h = row.iter().map(|s| card_height(s, card_w)).max().unwrap_or(0);
            for (i, service) in row.iter().enumerate() {
                let x = inner.x + i as u16 * (card_w + 2);
                let card = Rect::new(x, y, card_w, h).intersection(buf.area);
                if card.is_empty() {
                    continue;
                }
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.border))
                    .style(Style::default().bg(theme.bg1));
                let body = block.inner(card);
                block.render(card, buf);

                put(buf, body.x, body.y, icon(service.kind()), Style::default().fg(theme.accent));
                put(
                    buf,
                    body.x,
                    body.y + 2,
                    &service.title,
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                );
                if body.height > 4 {
                    render_text(
                        buf,
                        Rect::new(body.x, body.y + 4, body.width, body.height - 4),
                        &service.description,
                        Style::default().fg(theme.grey1),
                    );
                }
            }
            y += h + 1;
        }
    }
}

/// Cards per row and card width
fn grid(inner: u16, count: usize) -> (usize, u16) {
    let fit = ((inner + 2) / (CARD_MIN_WIDTH + 2)).max(1) as usize;
    let per_row = fit.min(count.max(1));
    let width = (inner + 2) / per_row as u16 - 2;
    (per_row, width)
}

fn card_height(service: &Service, width: u16) -> u16 {
    // Border, icon, gap, title, gap, description, border
    6 + wrapped_lines(&service.description, width.saturating_sub(2))
}

fn icon(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Web => "</>",
        ServiceKind::Mobile => "[▯]",
        ServiceKind::Ai => "◆◇◆",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_cards() {
        assert_eq!(grid(100, 3), (3, 32));
        assert_eq!(grid(40, 3), (1, 40));
        assert_eq!(grid(200, 2).0, 2);
        assert_eq!(grid(100, 0).0, 1);
    }
}
