//! Periodic `liveStatus` push, cancellable through a shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::broadcaster::NotificationBroadcaster;

/// Drives the timer trigger of the broadcaster.
#[derive(Debug, Clone)]
pub struct LiveStatusTicker {
    broadcaster: Arc<NotificationBroadcaster>,
    period: Duration,
}

impl LiveStatusTicker {
    /// Creates a ticker firing every `period`.
    pub fn new(broadcaster: Arc<NotificationBroadcaster>, period: Duration) -> Self {
        Self {
            broadcaster,
            period,
        }
    }

    /// Runs on a background task until `cancel` turns `true`.
    pub fn spawn(self, cancel: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(cancel).await })
    }

    /// Runs until the cancel signal is received or its sender is dropped.
    ///
    /// The first push happens one full period after start.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        if *cancel.borrow() {
            return;
        }

        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_secs = self.period.as_secs(), "Live status ticker started");

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    let delivered = self.broadcaster.publish_live_status();
                    debug!(delivered, "Live status tick");
                }
            }
        }

        info!("Live status ticker stopped");
    }
}
