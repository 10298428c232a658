//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod progress_report;

// Re-export main functions
pub use progress_report::{progress_report_task, report_progress};
