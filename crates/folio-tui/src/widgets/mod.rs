mod about;
mod blog;
mod common;
mod contact;
mod grid;
mod hero;
mod list;
mod navbar;
mod page;
mod popup;
mod services;
mod status_bar;

use folio_core::contact::ContactField;
use folio_core::content::Slice;
use ratatui::{buffer::Buffer, layout::Rect};

pub use about::AboutWidget;
pub use blog::BlogWidget;
pub use contact::ContactWidget;
pub use hero::HeroWidget;
pub use list::ListWidget;
pub use navbar::NavbarWidget;
pub use page::draw;
pub use popup::PopupWidget;
pub use services::ServicesWidget;
pub use status_bar::StatusBarWidget;

use crate::app::App;

/// Interactive regions of one section, relative to the section's own buffer
#[derive(Debug, Default)]
pub struct SectionHits {
    pub cards: Vec<(Rect, usize)>,
    pub dots: Vec<(Rect, usize)>,
    pub fields: Vec<(Rect, ContactField)>,
    pub stage: Option<Rect>,
}

/// Rows a section needs at `width` before it is stretched to the viewport
pub fn section_height(slice: &Slice, width: u16) -> u16 {
    match slice {
        Slice::Navbar(_) => 0,
        Slice::Hero(s) => HeroWidget::height(s, width),
        Slice::AboutMe(s) => AboutWidget::height(s, width),
        Slice::Services(s) => ServicesWidget::height(s, width),
        Slice::Projects(s) | Slice::Experience(s) => ListWidget::height(s, width),
        Slice::Blog(s) => BlogWidget::height(s, width),
        Slice::Contact(s) => ContactWidget::height(s, width),
    }
}

fn render_section(buf: &mut Buffer, area: Rect, slice: &Slice, app: &App) -> SectionHits {
    match slice {
        Slice::Navbar(_) => SectionHits::default(),
        Slice::Hero(s) => {
            HeroWidget::render(buf, area, s, app);
            SectionHits::default()
        }
        Slice::AboutMe(s) => {
            AboutWidget::render(buf, area, s, app);
            SectionHits::default()
        }
        Slice::Services(s) => {
            ServicesWidget::render(buf, area, s, app);
            SectionHits::default()
        }
        Slice::Projects(s) => {
            ListWidget::render(buf, area, s, "02", "PROJECTS", app);
            SectionHits::default()
        }
        Slice::Experience(s) => {
            ListWidget::render(buf, area, s, "03", "EXPERIENCE", app);
            SectionHits::default()
        }
        Slice::Blog(s) => BlogWidget::render(buf, area, s, app),
        Slice::Contact(s) => ContactWidget::render(buf, area, s, app),
    }
}
