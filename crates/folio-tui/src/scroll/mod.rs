//! Smooth page scrolling
//!
//! `timing` and `config` hold the small pure helpers; `animation` combines
//! them into [`ScrollAnimator`], which the page view advances once per frame
//! with the current clock reading.
//!
//! ```ignore
//! use folio_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//! animator.scroll_by(3, max_scroll);
//! // every frame
//! let top_row = animator.update(clock.now(), max_scroll);
//! ```

pub mod config;
pub mod timing;

pub mod animation;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;
pub use folio_core::animation::EasingTypeExt;
pub use folio_core::{EasingType, ScrollConfig};
