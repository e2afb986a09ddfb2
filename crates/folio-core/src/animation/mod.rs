//! Decorative animation primitives
//!
//! Everything here is a pure function of elapsed time, so a component only
//! needs to remember when its animation started.

pub mod easing;
pub mod grid;
pub mod tween;
pub mod typewriter;

pub use easing::EasingTypeExt;
pub use grid::{GridLines, GridOverlay};
pub use tween::{Repeat, Tween};
pub use typewriter::Typewriter;

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
