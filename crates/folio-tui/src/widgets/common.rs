use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Rows used by a section heading plus the gap below it
pub const HEADING_ROWS: u16 = 3;

/// Numbered section heading with the neon divider under it
///
/// `jitter` shifts two colored copies of the title sideways for the glitch
/// effect.
pub fn render_heading(
    buf: &mut Buffer,
    area: Rect,
    number: &str,
    title: &str,
    theme: &Theme,
    jitter: u16,
) {
    if area.height == 0 || area.width < 4 {
        return;
    }
    let x = area.x + 2;
    let title_x = x + number.width() as u16 + 2;

    put(buf, x, area.y, number, Style::default().fg(theme.accent));
    if jitter > 0 {
        put(
            buf,
            title_x + jitter,
            area.y,
            title,
            Style::default().fg(theme.glitch_b),
        );
        put(
            buf,
            title_x.saturating_sub(jitter),
            area.y,
            title,
            Style::default().fg(theme.glitch_a),
        );
    } else {
        put(
            buf,
            title_x,
            area.y,
            title,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
    }

    if area.height > 1 {
        let width = 16.min(area.width.saturating_sub(title_x - area.x));
        put(
            buf,
            title_x,
            area.y + 1,
            "━".repeat(width as usize),
            Style::default().fg(theme.accent),
        );
    }
}

/// Write a string, silently skipping anything outside the buffer
pub fn put(buf: &mut Buffer, x: u16, y: u16, text: impl AsRef<str>, style: Style) {
    let area = buf.area;
    if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
        return;
    }
    buf.set_stringn(x, y, text, (area.right() - x) as usize, style);
}

/// Wrapped paragraph
pub fn render_text(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    Paragraph::new(text.to_string())
        .style(style)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .render(area, buf);
}

/// Chips such as skills or tags, wrapped across lines
pub fn render_chips(buf: &mut Buffer, area: Rect, chips: &[String], style: Style) {
    let mut spans = Vec::with_capacity(chips.len() * 2);
    for chip in chips {
        spans.push(Span::styled(format!("[{}]", chip), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .render(area, buf);
}

/// Number of rows `text` takes when word-wrapped to `width`
pub fn wrapped_lines(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = width as usize;
    let mut lines = 0u16;
    for paragraph in text.lines() {
        let mut current = 0usize;
        let mut para_lines = 1u16;
        for word in paragraph.split_whitespace() {
            let w = word.width();
            if current == 0 {
                current = w;
            } else if current + 1 + w <= width {
                current += 1 + w;
            } else {
                para_lines += 1;
                current = w;
            }
            // Words wider than the line are broken across rows
            while current > width {
                para_lines += 1;
                current -= width;
            }
        }
        lines = lines.saturating_add(para_lines);
    }
    lines.max(1)
}

/// Rows needed for wrapped chips
pub fn chip_lines(chips: &[String], width: u16) -> u16 {
    let joined: Vec<String> = chips.iter().map(|c| format!("[{}]", c)).collect();
    wrapped_lines(&joined.join(" "), width)
}

/// Truncate to `max_width` columns with an ellipsis
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Centered rect of the given size inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Inner content column with side padding
pub fn content_area(area: Rect) -> Rect {
    let pad = if area.width > 40 { 4 } else { 1 };
    Rect::new(
        area.x + pad,
        area.y,
        area.width.saturating_sub(pad * 2),
        area.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_lines() {
        assert_eq!(wrapped_lines("", 10), 1);
        assert_eq!(wrapped_lines("one two three", 20), 1);
        assert_eq!(wrapped_lines("one two three", 7), 2);
        assert_eq!(wrapped_lines("first\nsecond", 20), 2);
        assert_eq!(wrapped_lines("abcdefghij", 4), 3);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Debouncing Without Tears", 10), "Debounc...");
        assert_eq!(truncate_str("abc", 2), "..");
    }

    #[test]
    fn test_centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_heading_draws_number_and_title() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        render_heading(&mut buf, area, "01", "ABOUT ME", &theme, 0);
        let row: String = (0..30u16)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol()).unwrap_or(" "))
            .collect();
        assert!(row.contains("01"));
        assert!(row.contains("ABOUT ME"));
    }
}
