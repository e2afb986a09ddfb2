use folio_core::contact::ContactField;
use folio_core::content::ContactSlice;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::common::{content_area, put, render_heading, truncate_str, HEADING_ROWS};
use super::SectionHits;
use crate::app::App;

const SPLIT_WIDTH: u16 = 90;
const MESSAGE_ROWS: u16 = 4;
/// Three inputs with a hint row each, plus the send button
const FORM_ROWS: u16 = 4 + 4 + (MESSAGE_ROWS + 2 + 1) + 1;

pub struct ContactWidget;

impl ContactWidget {
    pub fn height(slice: &ContactSlice, width: u16) -> u16 {
        let inner = content_area(Rect::new(0, 0, width, 0)).width;
        let info = info_rows(slice);
        let body = if inner >= SPLIT_WIDTH {
            info.max(FORM_ROWS)
        } else {
            info + 1 + FORM_ROWS
        };
        HEADING_ROWS + body + 2
    }

    pub fn render(buf: &mut Buffer, area: Rect, slice: &ContactSlice, app: &App) -> SectionHits {
        let theme = &app.theme;
        let inner = content_area(area);
        let mut hits = SectionHits::default();
        render_heading(buf, inner, "06", "GET IN TOUCH", theme, 0);

        let body_y = inner.y + HEADING_ROWS;
        let (info_area, form_area) = if inner.width >= SPLIT_WIDTH {
            let left = (inner.width - 4) * 2 / 5;
            (
                Rect::new(inner.x, body_y, left, info_rows(slice)),
                Rect::new(inner.x + left + 4, body_y, inner.width - left - 4, FORM_ROWS),
            )
        } else {
            let info = info_rows(slice);
            (
                Rect::new(inner.x, body_y, inner.width, info),
                Rect::new(inner.x, body_y + info + 1, inner.width, FORM_ROWS),
            )
        };

        // Contact information
        put(
            buf,
            info_area.x,
            info_area.y,
            "Contact Information",
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        let mut y = info_area.y + 2;
        let width = info_area.width.saturating_sub(4) as usize;
        for (icon, value) in [
            ("✉", slice.email.as_str()),
            ("☎", slice.phone_number.as_str()),
            ("⌂", slice.address.as_str()),
        ] {
            if value.is_empty() {
                continue;
            }
            put(buf, info_area.x, y, icon, Style::default().fg(theme.accent));
            put(buf, info_area.x + 3, y, truncate_str(value, width), Style::default().fg(theme.fg1));
            y += 1;
        }
        for (label, url) in social(slice) {
            y += 1;
            put(buf, info_area.x, y, label, Style::default().fg(theme.grey1));
            put(
                buf,
                info_area.x + 10,
                y,
                truncate_str(url, info_area.width.saturating_sub(10) as usize),
                Style::default().fg(theme.accent_dim).add_modifier(Modifier::UNDERLINED),
            );
        }

        // Form
        let editing = app.editing_field();
        let errors = app.contact_rules.validate(&app.contact_form).err();
        let mut y = form_area.y;
        for field in ContactField::ALL {
            let rows = if field == ContactField::Message {
                MESSAGE_ROWS + 2
            } else {
                3
            };
            let rect = Rect::new(form_area.x, y, form_area.width, rows).intersection(buf.area);
            let focused = editing == Some(field);
            let value = app.contact_form.field(field);

            let border = if focused { theme.accent } else { theme.border };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label()))
                .title_style(Style::default().fg(if focused { theme.accent } else { theme.grey1 }));
            let text_area = block.inner(rect);
            block.render(rect, buf);

            if value.is_empty() && !focused {
                put(
                    buf,
                    text_area.x,
                    text_area.y,
                    field.placeholder(),
                    Style::default().fg(theme.grey0),
                );
            } else {
                let shown = if focused {
                    format!("{}▏", value)
                } else {
                    value.to_string()
                };
                Paragraph::new(shown)
                    .style(Style::default().fg(theme.fg0))
                    .wrap(Wrap { trim: false })
                    .render(text_area, buf);
            }

            // Hints only once the visitor has typed something
            if !value.is_empty() {
                if let Some(error) = errors.as_ref().and_then(|e| e.for_field(field)) {
                    put(
                        buf,
                        form_area.x + 1,
                        y + rows,
                        truncate_str(&error.to_string(), form_area.width as usize),
                        Style::default().fg(theme.error),
                    );
                }
            }

            hits.fields.push((rect, field));
            y += rows + 1;
        }

        let (label, style) = if app.submitting {
            ("[ Sending... ]", Style::default().fg(theme.grey1))
        } else if editing.is_some() {
            (
                "[ Send Message ⏎ ]",
                Style::default().fg(theme.bg0).bg(theme.accent).add_modifier(Modifier::BOLD),
            )
        } else {
            ("[ Send Message ]  press c", Style::default().fg(theme.accent))
        };
        put(buf, form_area.x, y, label, style);

        hits
    }
}

fn social(slice: &ContactSlice) -> Vec<(&'static str, &str)> {
    let mut links = Vec::new();
    for set in &slice.social_links {
        if let Some(url) = &set.linkedln {
            links.push(("LinkedIn", url.as_str()));
        }
        if let Some(url) = &set.github {
            links.push(("GitHub", url.as_str()));
        }
        if let Some(url) = &set.twitter {
            links.push(("Twitter", url.as_str()));
        }
    }
    links
}

fn info_rows(slice: &ContactSlice) -> u16 {
    let lines = [&slice.email, &slice.phone_number, &slice.address]
        .iter()
        .filter(|v| !v.is_empty())
        .count();
    2 + lines as u16 + social(slice).len() as u16 * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::SocialLinks;

    #[test]
    fn test_social_links_in_order() {
        let slice = ContactSlice {
            social_links: vec![SocialLinks {
                linkedln: Some("https://linkedin.com/in/ada".parse().unwrap()),
                github: Some("https://github.com/ada".parse().unwrap()),
                twitter: None,
            }],
            ..Default::default()
        };
        let labels: Vec<_> = social(&slice).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn test_narrow_layout_stacks_form_below_info() {
        let slice = ContactSlice {
            email: "ada@example.com".into(),
            ..Default::default()
        };
        assert_eq!(ContactWidget::height(&slice, 140), HEADING_ROWS + FORM_ROWS + 2);
        assert_eq!(
            ContactWidget::height(&slice, 60),
            HEADING_ROWS + 3 + 1 + FORM_ROWS + 2
        );
    }
}
