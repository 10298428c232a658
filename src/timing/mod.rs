//! Timing module
//!
//! This module contains the stopwatch value type and the clocks it reads.

pub mod clock;
pub mod stopwatch;

// Re-export main types
pub use clock::{Clock, ManualClock, MonotonicClock, Timestamp};
pub use stopwatch::{Stopwatch, StopwatchStatus};
