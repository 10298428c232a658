//! Progress report background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    time::{interval_at, Instant},
};
use tracing::{debug, info};

use crate::{state::AppState, timing::Stopwatch};

/// Background task that logs the live elapsed time while the stopwatch runs
pub async fn progress_report_task(state: Arc<AppState>, period: Duration) {
    info!("Starting progress report task (every {:?})", period);

    report_progress(state.subscribe(), period, |stopwatch| {
        info!("Stopwatch {}: {}", stopwatch.status(), stopwatch.describe());
    })
    .await;

    info!("Progress report task finished");
}

/// Call `report` every `period` while the watched stopwatch is running, and
/// once whenever it stops. Returns when the sender side is dropped.
pub async fn report_progress<F>(mut rx: watch::Receiver<Stopwatch>, period: Duration, mut report: F)
where
    F: FnMut(&Stopwatch),
{
    loop {
        let current = *rx.borrow_and_update();

        match current {
            Stopwatch::Running { .. } => {
                let mut ticker = interval_at(Instant::now() + period, period);

                loop {
                    tokio::select! {
                        _ = ticker.tick() => report(&current),
                        changed = rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }

                // The new value is handled on the next pass
                continue;
            }
            Stopwatch::Stopped { .. } => report(&current),
            Stopwatch::OnHold => debug!("Stopwatch on hold, nothing to report"),
        }

        if rx.changed().await.is_err() {
            return;
        }
    }
}
