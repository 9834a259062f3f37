//! Background refresh for the admin dashboard.
//!
//! The poller owns nothing but a clone of the [`AdminDashboard`]. Each tick or
//! manual request runs one [`AdminDashboard::refresh`]; failures are logged
//! and the next tick tries again. Refreshes are sequential within the poller,
//! while a refresh started elsewhere can overlap it. The board keeps whichever
//! list arrived last.

use super::AdminDashboard;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Notify};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Control handle for a running poller.
pub struct PollerHandle {
    refresh: Arc<Notify>,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl PollerHandle {
    /// Ask for a refresh now instead of waiting for the next tick.
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Stop polling and wait for an in-flight refresh to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.handle.await;
    }
}

/// Start refreshing `dashboard` every `period`. The first refresh runs immediately.
pub fn spawn_poller(dashboard: AdminDashboard, period: Duration) -> PollerHandle {
    let refresh = Arc::new(Notify::new());
    let (shutdown, mut stop) = oneshot::channel();
    let trigger = refresh.clone();

    // tokio's interval panics on a zero period
    let period = period.max(Duration::from_millis(1));

    let handle = tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_secs = period.as_secs(), "Poller started");

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => debug!("Scheduled refresh"),
                _ = trigger.notified() => debug!("Manual refresh"),
            }
            if let Err(e) = dashboard.refresh().await {
                warn!(error = %e, "Refresh failed; keeping last view");
            }
        }

        info!("Poller stopped");
    });

    PollerHandle {
        refresh,
        shutdown,
        handle,
    }
}
