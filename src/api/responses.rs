//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timing::{Clock, ManualClock, MonotonicClock, Stopwatch, StopwatchStatus};

/// Snapshot of a stopwatch taken when the response is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopwatchReport {
    pub status: StopwatchStatus,
    pub elapsed_seconds: f64,
    pub elapsed_nanos: u64,
    pub description: String,
}

impl From<Stopwatch> for StopwatchReport {
    fn from(stopwatch: Stopwatch) -> Self {
        // One clock reading so every field agrees
        let now = ManualClock::new(MonotonicClock.now());
        let elapsed = stopwatch.elapsed_with(&now);
        Self {
            status: stopwatch.status(),
            elapsed_seconds: elapsed.as_secs_f64(),
            elapsed_nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            description: stopwatch.describe_with(&now),
        }
    }
}

/// API response structure for transition endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub stopwatch: StopwatchReport,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(message: String, stopwatch: Stopwatch) -> Self {
        let stopwatch = StopwatchReport::from(stopwatch);
        Self {
            status: stopwatch.status.to_string(),
            message,
            timestamp: Utc::now(),
            stopwatch,
        }
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub stopwatch: StopwatchReport,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
