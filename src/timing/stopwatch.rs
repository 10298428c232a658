//! Stopwatch value type and its transitions

use std::{fmt, time::Duration};
use serde::{Deserialize, Serialize};

use super::clock::{Clock, MonotonicClock, Timestamp};

/// A stopwatch that is idle, running, or stopped.
///
/// Values are immutable: every transition consumes the receiver and returns
/// the next value. Reads on a `Running` value are measured against the clock
/// at the moment of the call, so two reads of the same value can differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stopwatch {
    /// Never started, or reset
    #[default]
    OnHold,
    /// Advancing since `started_at`
    Running { started_at: Timestamp },
    /// Halted; the measured interval is fixed
    Stopped {
        started_at: Timestamp,
        ended_at: Timestamp,
    },
}

/// Which variant a stopwatch is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwatchStatus {
    OnHold,
    Running,
    Stopped,
}

impl fmt::Display for StopwatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopwatchStatus::OnHold => "on_hold",
            StopwatchStatus::Running => "running",
            StopwatchStatus::Stopped => "stopped",
        })
    }
}

impl Stopwatch {
    /// Create a stopwatch on hold
    pub fn new() -> Self {
        Self::OnHold
    }

    /// Start (or restart) timing from now
    #[must_use]
    pub fn start(self) -> Self {
        self.start_with(MonotonicClock)
    }

    /// Start (or restart) timing from `clock`'s current reading.
    ///
    /// Any earlier timing data is discarded.
    #[must_use]
    pub fn start_with(self, clock: impl Clock) -> Self {
        Self::Running {
            started_at: clock.now(),
        }
    }

    /// Stop timing now
    #[must_use]
    pub fn stop(self) -> Self {
        self.stop_with(MonotonicClock)
    }

    /// Stop timing at `clock`'s current reading.
    ///
    /// Only a running stopwatch changes; stopping one that is on hold or
    /// already stopped returns it as is.
    #[must_use]
    pub fn stop_with(self, clock: impl Clock) -> Self {
        match self {
            Self::Running { started_at } => Self::Stopped {
                started_at,
                ended_at: clock.now(),
            },
            other => other,
        }
    }

    /// Discard all timing data
    #[must_use]
    pub fn reset(self) -> Self {
        Self::OnHold
    }

    pub fn status(&self) -> StopwatchStatus {
        match self {
            Self::OnHold => StopwatchStatus::OnHold,
            Self::Running { .. } => StopwatchStatus::Running,
            Self::Stopped { .. } => StopwatchStatus::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        match *self {
            Self::OnHold => None,
            Self::Running { started_at } | Self::Stopped { started_at, .. } => Some(started_at),
        }
    }

    pub fn ended_at(&self) -> Option<Timestamp> {
        match *self {
            Self::Stopped { ended_at, .. } => Some(ended_at),
            _ => None,
        }
    }

    /// Time measured so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed_with(MonotonicClock)
    }

    /// Time measured so far, reading `clock` if still running
    pub fn elapsed_with(&self, clock: impl Clock) -> Duration {
        match self.stop_with(clock) {
            Self::Stopped {
                started_at,
                ended_at,
            } => Duration::from_nanos(ended_at.saturating_sub(started_at)),
            _ => Duration::ZERO,
        }
    }

    /// Time measured so far, in fractional seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn elapsed_secs_with(&self, clock: impl Clock) -> f64 {
        self.elapsed_with(clock).as_secs_f64()
    }

    /// Human readable summary of the current state
    pub fn describe(&self) -> String {
        self.describe_with(MonotonicClock)
    }

    pub fn describe_with(&self, clock: impl Clock) -> String {
        match self {
            Self::OnHold => "Not yet started".to_string(),
            Self::Running { .. } => {
                format!("Running for {:?} seconds", self.elapsed_secs_with(clock))
            }
            Self::Stopped { .. } => {
                format!("Ended, was running {:?} seconds", self.elapsed_secs_with(clock))
            }
        }
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
