//! Blog carousel: index state machine, card roles and swipe gestures

mod controller;
mod gesture;
mod role;

pub use controller::CarouselController;
pub use gesture::{SwipeDirection, SwipeTracker};
pub use role::{CardPose, CardRole};
