//! State management module
//!
//! This module holds the server's single shared stopwatch.

pub mod app_state;

// Re-export main types
pub use app_state::AppState;
