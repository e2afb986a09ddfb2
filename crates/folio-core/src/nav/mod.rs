//! Navigation: nav vocabulary, nav items and the active-section tracker

mod item;
mod target;
mod tracker;

pub use item::NavItem;
pub use target::NavTarget;
pub use tracker::{detect_active_section, ActiveSectionTracker};
