use folio_core::content::{AboutMeSlice, TechArea};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::common::{chip_lines, content_area, put, render_chips, render_heading, render_text, wrapped_lines, HEADING_ROWS};
use crate::app::App;

/// Two columns from this width up
const SPLIT_WIDTH: u16 = 90;
const BAR_WIDTH: u16 = 20;

pub struct AboutWidget;

impl AboutWidget {
    pub fn height(slice: &AboutMeSlice, width: u16) -> u16 {
        let inner = content_area(Rect::new(0, 0, width, 0)).width;
        let (left_w, right_w) = column_widths(inner);
        let left = journey_rows(slice, left_w);
        let right = expertise_rows(slice, right_w);
        let body = if inner >= SPLIT_WIDTH {
            left.max(right)
        } else {
            left + 1 + right
        };
        HEADING_ROWS + body + 2
    }

    pub fn render(buf: &mut Buffer, area: Rect, slice: &AboutMeSlice, app: &App) {
        let theme = &app.theme;
        let inner = content_area(area);
        render_heading(buf, inner, "01", "ABOUT ME", theme, app.glitch_offset());

        let (left_w, right_w) = column_widths(inner.width);
        let body_y = inner.y + HEADING_ROWS;
        let left = Rect::new(inner.x, body_y, left_w, journey_rows(slice, left_w));
        let right = if inner.width >= SPLIT_WIDTH {
            Rect::new(
                inner.x + left_w + 4,
                body_y,
                right_w,
                expertise_rows(slice, right_w),
            )
        } else {
            Rect::new(
                inner.x,
                left.bottom() + 1,
                right_w,
                expertise_rows(slice, right_w),
            )
        };

        // Journey
        put(
            buf,
            left.x,
            left.y,
            &slice.my_journey,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        let detail_rows = wrapped_lines(&slice.journey_detail, left.width);
        render_text(
            buf,
            Rect::new(left.x, left.y + 2, left.width, detail_rows),
            &slice.journey_detail,
            Style::default().fg(theme.grey1),
        );
        if !slice.tags.is_empty() {
            render_chips(
                buf,
                Rect::new(
                    left.x,
                    left.y + 3 + detail_rows,
                    left.width,
                    chip_lines(&slice.tags, left.width),
                ),
                &slice.tags,
                Style::default().fg(theme.accent),
            );
        }

        // Expertise
        put(
            buf,
            right.x,
            right.y,
            &slice.tech_expertise,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        let skills_rows = chip_lines(&slice.tech_skills, right.width);
        render_chips(
            buf,
            Rect::new(right.x, right.y + 2, right.width, skills_rows),
            &slice.tech_skills,
            Style::default().fg(theme.fg1),
        );
        let mut y = right.y + 3 + skills_rows;
        for area in &slice.techareas {
            put(buf, right.x, y, &area.title, Style::default().fg(theme.grey1));
            put(buf, right.x, y + 1, bar(area), Style::default().fg(theme.accent));
            put(
                buf,
                right.x + BAR_WIDTH + 1,
                y + 1,
                &area.percentage,
                Style::default().fg(theme.grey0),
            );
            y += 2;
        }
    }
}

fn column_widths(inner: u16) -> (u16, u16) {
    if inner >= SPLIT_WIDTH {
        let left = (inner - 4) / 2;
        (left, inner - 4 - left)
    } else {
        (inner, inner)
    }
}

fn journey_rows(slice: &AboutMeSlice, width: u16) -> u16 {
    let tags = if slice.tags.is_empty() {
        0
    } else {
        1 + chip_lines(&slice.tags, width)
    };
    2 + wrapped_lines(&slice.journey_detail, width) + tags
}

fn expertise_rows(slice: &AboutMeSlice, width: u16) -> u16 {
    2 + chip_lines(&slice.tech_skills, width) + 1 + slice.techareas.len() as u16 * 2
}

/// Proficiency bar, empty when the percentage is not a number
fn bar(area: &TechArea) -> String {
    let filled = area
        .percent()
        .map(|p| (p as u16 * BAR_WIDTH + 50) / 100)
        .unwrap_or(0);
    format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat((BAR_WIDTH - filled) as usize)
    )
}
