use folio_core::content::HeroSlice;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::common::put;
use crate::app::App;

const ROWS: u16 = 9;

pub struct HeroWidget;

impl HeroWidget {
    pub fn height(_slice: &HeroSlice, _width: u16) -> u16 {
        ROWS
    }

    pub fn render(buf: &mut Buffer, area: Rect, slice: &HeroSlice, app: &App) {
        let theme = &app.theme;
        let top = area.y + area.height.saturating_sub(ROWS) / 2;
        let center = |text: &str| area.x + area.width.saturating_sub(text.width() as u16) / 2;

        let greeting = "Hi, I'm";
        put(buf, center(greeting), top, greeting, Style::default().fg(theme.grey1));

        let name = spaced_upper(&slice.name);
        let name = if name.width() as u16 > area.width {
            slice.name.to_uppercase()
        } else {
            name
        };
        put(
            buf,
            center(&name),
            top + 2,
            &name,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        put(
            buf,
            center(&slice.title),
            top + 3,
            &slice.title,
            Style::default().fg(theme.accent),
        );

        // Typed expertise with a blinking cursor; centred on the full word
        // width so the line does not shift while typing
        let typed = app.hero_text();
        let longest = slice
            .expertise
            .split(" | ")
            .map(|w| w.trim().width())
            .max()
            .unwrap_or(0) as u16;
        let x = area.x + area.width.saturating_sub(longest + 3) / 2;
        put(buf, x, top + 5, "> ", Style::default().fg(theme.grey0));
        put(buf, x + 2, top + 5, typed, Style::default().fg(theme.fg1));
        put(
            buf,
            x + 2 + typed.width() as u16,
            top + 5,
            "▌",
            Style::default().fg(theme.fade(theme.accent, app.cursor_opacity())),
        );

        if let Some(cta) = &slice.cta {
            let label = format!("[ {} → ]", cta.text);
            put(
                buf,
                center(&label),
                top + 7,
                &label,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            );
            let hint = "Tab to explore, c to get in touch";
            put(buf, center(hint), top + 8, hint, Style::default().fg(theme.grey0));
        }
    }
}

fn spaced_upper(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
