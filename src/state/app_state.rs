//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::timing::Stopwatch;

/// Shared server state guarding the one stopwatch this server exposes
#[derive(Debug)]
pub struct AppState {
    /// Current stopwatch value
    pub stopwatch: Arc<Mutex<Stopwatch>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel publishing every new stopwatch value
    pub stopwatch_tx: watch::Sender<Stopwatch>,
    /// Keep the receiver alive to prevent channel closure
    pub _stopwatch_rx: watch::Receiver<Stopwatch>,
}

impl AppState {
    /// Create a new AppState with the stopwatch on hold
    pub fn new(port: u16, host: String) -> Self {
        let (stopwatch_tx, stopwatch_rx) = watch::channel(Stopwatch::new());

        Self {
            stopwatch: Arc::new(Mutex::new(Stopwatch::new())),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            stopwatch_tx,
            _stopwatch_rx: stopwatch_rx,
        }
    }

    /// Replace the stopwatch with the result of `transition` and notify listeners
    pub fn apply<F>(&self, action: &str, transition: F) -> Result<Stopwatch, String>
    where
        F: FnOnce(Stopwatch) -> Stopwatch,
    {
        let mut stopwatch = self.stopwatch.lock()
            .map_err(|e| format!("Failed to lock stopwatch: {}", e))?;

        let previous = *stopwatch;
        let next = transition(previous);
        *stopwatch = next;
        drop(stopwatch); // Release the lock early

        if previous == next {
            debug!("Action {} left stopwatch unchanged ({})", action, next.status());
        } else {
            info!("Action {}: {} -> {}", action, previous.status(), next.status());
        }

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        // No-op transitions must not wake subscribers
        self.stopwatch_tx.send_if_modified(|current| {
            let changed = *current != next;
            *current = next;
            changed
        });

        Ok(next)
    }

    /// Start or restart the stopwatch
    pub fn start(&self) -> Result<Stopwatch, String> {
        self.apply("start", Stopwatch::start)
    }

    /// Stop the stopwatch if it is running
    pub fn stop(&self) -> Result<Stopwatch, String> {
        self.apply("stop", Stopwatch::stop)
    }

    /// Put the stopwatch back on hold
    pub fn reset(&self) -> Result<Stopwatch, String> {
        self.apply("reset", Stopwatch::reset)
    }

    /// Get the current stopwatch value
    pub fn current(&self) -> Result<Stopwatch, String> {
        self.stopwatch.lock()
            .map(|stopwatch| *stopwatch)
            .map_err(|e| format!("Failed to lock stopwatch: {}", e))
    }

    /// Subscribe to stopwatch updates
    pub fn subscribe(&self) -> watch::Receiver<Stopwatch> {
        self.stopwatch_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
