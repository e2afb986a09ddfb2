use folio_core::carousel::{CardPose, CardRole};
use folio_core::content::{BlogPost, BlogSlice};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::common::{content_area, put, render_heading, render_text, truncate_str, wrapped_lines, HEADING_ROWS};
use super::SectionHits;
use crate::app::App;
use crate::theme::Theme;

const CARD_WIDTH: u16 = 36;
const CARD_WIDTH_COMPACT: u16 = 28;
const CARD_HEIGHT: u16 = 12;

/// Blog carousel: cards posed around the active post, dots below
pub struct BlogWidget;

impl BlogWidget {
    pub fn height(slice: &BlogSlice, width: u16) -> u16 {
        let inner = content_area(Rect::new(0, 0, width, 0)).width;
        HEADING_ROWS + intro_rows(slice, inner) + CARD_HEIGHT + 2 + 2 + 1
    }

    pub fn render(buf: &mut Buffer, area: Rect, slice: &BlogSlice, app: &App) -> SectionHits {
        let theme = &app.theme;
        let inner = content_area(area);
        let mut hits = SectionHits::default();
        render_heading(buf, inner, "05", "BLOGS", theme, 0);

        let mut y = inner.y + HEADING_ROWS;
        if !slice.heading.is_empty() {
            put(
                buf,
                inner.x,
                y,
                &slice.heading,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            );
            y += 1;
        }
        if !slice.description.is_empty() {
            let rows = wrapped_lines(&slice.description, inner.width);
            render_text(
                buf,
                Rect::new(inner.x, y, inner.width, rows).intersection(buf.area),
                &slice.description,
                Style::default().fg(theme.grey1),
            );
            y += rows;
        }
        y += 1;

        if slice.items.is_empty() {
            put(buf, inner.x, y, "No posts yet.", Style::default().fg(theme.grey0));
            return hits;
        }

        let stage = Rect::new(area.x, y, area.width, CARD_HEIGHT + 2).intersection(buf.area);
        hits.stage = Some(stage);

        let compact = app.is_carousel_compact();
        let base_width = if compact { CARD_WIDTH_COMPACT } else { CARD_WIDTH };
        let px_per_col = app.config.ui.px_per_col;

        // Back to front so the centre card ends up on top
        let mut order: Vec<(usize, CardRole, CardPose)> = app
            .carousel
            .roles()
            .into_iter()
            .enumerate()
            .map(|(i, role)| (i, role, role.pose(compact)))
            .filter(|(_, _, pose)| pose.visible)
            .collect();
        order.sort_by_key(|(_, _, pose)| pose.z_index);

        for (index, role, pose) in order {
            let (Some(post), Some(card)) = (
                slice.items.get(index),
                card_rect(stage, base_width, &pose, px_per_col),
            ) else {
                continue;
            };
            render_card(buf, card, post, role, &pose, theme);
            if pose.interactive {
                hits.cards.push((card, index));
            }
        }

        // Dots
        let dots_y = stage.bottom() + 1;
        let count = slice.items.len() as u16;
        let dots_x = area.x + area.width.saturating_sub(count * 2) / 2;
        for i in 0..slice.items.len() {
            let x = dots_x + i as u16 * 2;
            let active = i == app.carousel.active_index();
            let (symbol, color) = if active {
                ("●", theme.accent)
            } else {
                ("○", theme.grey0)
            };
            put(buf, x, dots_y, symbol, Style::default().fg(color));
            hits.dots.push((Rect::new(x, dots_y, 1, 1), i));
        }

        if app.carousel.is_navigable() {
            let hint = "h/l or drag to browse · 1-9 jump · o open";
            put(
                buf,
                area.x + area.width.saturating_sub(hint.width() as u16) / 2,
                dots_y + 1,
                hint,
                Style::default().fg(theme.grey0),
            );
        }

        hits
    }
}

fn intro_rows(slice: &BlogSlice, width: u16) -> u16 {
    let heading = u16::from(!slice.heading.is_empty());
    let description = if slice.description.is_empty() {
        0
    } else {
        wrapped_lines(&slice.description, width)
    };
    heading + description + 1
}

/// Card rectangle inside the stage, clipped; `None` when too little is left
fn card_rect(stage: Rect, base_width: u16, pose: &CardPose, px_per_col: f64) -> Option<Rect> {
    let width = (base_width as f64 * pose.scale).round() as i32;
    let height = (CARD_HEIGHT as f64 * pose.scale).round() as i32;
    let offset = if px_per_col > 0.0 {
        (pose.x_offset / px_per_col).round() as i32
    } else {
        0
    };

    let center_x = stage.x as i32 + stage.width as i32 / 2 + offset;
    let left = (center_x - width / 2).max(stage.x as i32);
    let right = (center_x - width / 2 + width).min(stage.right() as i32);
    let top = stage.y as i32 + 1 + (CARD_HEIGHT as i32 - height) / 2;

    if right - left < 4 || height < 3 {
        return None;
    }
    Some(Rect::new(left as u16, top as u16, (right - left) as u16, height as u16))
}

fn render_card(
    buf: &mut Buffer,
    card: Rect,
    post: &BlogPost,
    role: CardRole,
    pose: &CardPose,
    theme: &Theme,
) {
    let dim = |color: Color| theme.fade(color, pose.opacity);
    let border = if role == CardRole::Center {
        theme.accent
    } else {
        theme.border
    };

    Clear.render(card, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim(border)))
        .style(Style::default().bg(theme.bg1));
    let body = block.inner(card);
    block.render(card, buf);
    if body.width == 0 || body.height == 0 {
        return;
    }

    let width = body.width as usize;
    put(
        buf,
        body.x,
        body.y,
        truncate_str(&post.post_category.to_uppercase(), width),
        Style::default().fg(dim(theme.accent)),
    );
    put(
        buf,
        body.x,
        body.y + 1,
        truncate_str(&post.post_title, width),
        Style::default().fg(dim(theme.fg0)).add_modifier(Modifier::BOLD),
    );

    // Only the centre card has room for details
    if role != CardRole::Center {
        return;
    }
    let footer_y = body.bottom().saturating_sub(2);
    let excerpt_rows = footer_y.saturating_sub(body.y + 3);
    if excerpt_rows > 0 {
        render_text(
            buf,
            Rect::new(body.x, body.y + 3, body.width, excerpt_rows),
            &post.post_excerpt,
            Style::default().fg(theme.grey1),
        );
    }
    let meta = match post.formatted_date() {
        Some(date) => format!("{} · {}", date, post.reading_time_label()),
        None => post.reading_time_label(),
    };
    put(buf, body.x, footer_y, truncate_str(&meta, width), Style::default().fg(theme.grey0));
    if !post.author_name.is_empty() {
        put(
            buf,
            body.x,
            footer_y + 1,
            truncate_str(&format!("by {}", post.author_name), width),
            Style::default().fg(theme.grey0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> Rect {
        Rect::new(0, 10, 120, CARD_HEIGHT + 2)
    }

    #[test]
    fn test_center_card_is_centered() {
        let pose = CardRole::Center.pose(false);
        let card = card_rect(stage(), CARD_WIDTH, &pose, 10.0).unwrap();
        assert_eq!(card.width, CARD_WIDTH);
        assert_eq!(card.x + card.width / 2, 60);
        assert_eq!(card.height, CARD_HEIGHT);
    }

    #[test]
    fn test_side_cards_are_smaller_and_offset() {
        let left = card_rect(stage(), CARD_WIDTH, &CardRole::Left.pose(false), 10.0).unwrap();
        let right = card_rect(stage(), CARD_WIDTH, &CardRole::Right.pose(false), 10.0).unwrap();
        // 220 layout units at 10 per column
        assert_eq!(left.x + left.width / 2, 60 - 22);
        assert_eq!(right.x + right.width / 2, 60 + 22);
        assert!(left.width < CARD_WIDTH);
        assert!(left.height < CARD_HEIGHT);
    }

    #[test]
    fn test_cards_are_clipped_to_stage() {
        let narrow = Rect::new(0, 0, 40, CARD_HEIGHT + 2);
        let card = card_rect(narrow, CARD_WIDTH, &CardRole::Right.pose(false), 10.0).unwrap();
        assert!(card.right() <= narrow.right());
        // Entirely off stage
        let far = CardPose {
            x_offset: 2000.0,
            ..CardRole::Right.pose(false)
        };
        assert!(card_rect(narrow, CARD_WIDTH, &far, 10.0).is_none());
    }
}
