use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match &app.mode {
            Mode::Normal => "NORMAL",
            Mode::EditContact(_) => "INSERT",
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let total = app.layout.max_scroll().max(1);
            let percent = (app.layout.scroll as u32 * 100 / total as u32).min(100);
            let post = match app.carousel.item_count() {
                0 => String::new(),
                n => format!(" | Post {}/{}", app.carousel.active_index() + 1, n),
            };
            format!(
                " {} | {} | {}%{}",
                mode_str,
                app.active_section().label(),
                percent,
                post
            )
        };

        let help_hint = if app.is_input_mode() {
            " Esc:leave Tab:field Enter:send "
        } else {
            " q:quit j/k:scroll Tab:section h/l:posts c:contact ?:help "
        };
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.border)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.border)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.border)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
