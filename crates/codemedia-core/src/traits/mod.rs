//! Core traits defined in `codemedia-core` and implemented by other crates.

pub mod clock;

pub use clock::{ClockSource, ManualClock, SystemClock};
