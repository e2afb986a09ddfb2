use folio_core::contact::{Toast, ToastKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::common::centered_rect;
use crate::theme::Theme;

const HELP: &[(&str, &str)] = &[
    ("j / k, ↓ / ↑", "Scroll"),
    ("Ctrl-d / Ctrl-u", "Half page"),
    ("Space / PgDn / PgUp", "Full page"),
    ("gg / G", "Top / bottom"),
    ("Tab / Shift-Tab", "Next / previous section"),
    ("h / l, ← / →", "Previous / next post"),
    ("1-9", "Jump to post"),
    ("o", "Open post in browser"),
    ("c / i", "Write a message"),
    ("Esc", "Leave the form"),
    ("q", "Quit"),
];

pub struct PopupWidget;

impl PopupWidget {
    /// Toast in the bottom-right corner, above the status bar
    pub fn render_toast(frame: &mut Frame, toast: &Toast, theme: &Theme) {
        let area = frame.area();
        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✓", theme.success),
            ToastKind::Error => ("✗", theme.error),
        };
        let text = format!("{} {}", icon, toast.message);
        let width = (text.width() as u16 + 4).min(area.width.saturating_sub(2));
        let height = 3u16.min(area.height);
        if width < 5 || area.height < 5 {
            return;
        }
        let popup = Rect::new(
            area.right().saturating_sub(width + 1),
            area.bottom().saturating_sub(height + 2),
            width,
            height,
        );

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .block(block),
            popup,
        );
    }

    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let popup = centered_rect(56, HELP.len() as u16 + 4, area);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = HELP
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!(" {:<22}", keys), Style::default().fg(theme.accent)),
                    Span::styled(*what, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "any key to close",
            Style::default().fg(theme.grey0),
        )).alignment(Alignment::Center));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            popup,
        );
    }
}
