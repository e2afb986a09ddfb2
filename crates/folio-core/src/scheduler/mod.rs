//! Tick source and timers for the UI state machines
//!
//! Every timing API in this crate takes `now: Duration` measured from an
//! arbitrary origin instead of reading the wall clock. The terminal front end
//! feeds it from [`SystemClock`]; tests drive [`ManualClock`] forward by hand.

mod clock;
mod debounce;
mod interval;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
pub use interval::Interval;
