//! Stopwatch - A monotonic stopwatch value type
//!
//! The core is [`Stopwatch`], an immutable value that is on hold, running, or
//! stopped. The rest of the library serves one shared stopwatch over HTTP.

pub mod config;
pub mod timing;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use timing::{Clock, ManualClock, MonotonicClock, Stopwatch, StopwatchStatus, Timestamp};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
