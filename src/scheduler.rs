use crate::increment::IncrementController;
use crate::refresh::Refresher;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Polls the counting service for the lifetime of the process. There is no
/// way to stop it once started.
pub struct RefreshScheduler {
    refresher: Arc<Refresher>,
    controller: Arc<IncrementController>,
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(
        refresher: Arc<Refresher>,
        controller: Arc<IncrementController>,
        period: Duration,
    ) -> Self {
        Self {
            refresher,
            controller,
            period,
        }
    }

    /// Fires the three routines as independent tasks and returns at once.
    pub fn refresh_all(&self) {
        self.refresher.spawn_last_event();
        self.refresher.spawn_persons(self.controller.activation());
        self.refresher.spawn_totals();
    }

    /// Refreshes immediately, then every period.
    pub fn start(self) -> JoinHandle<()> {
        info!(period = ?self.period, "refresh loop started");
        tokio::spawn(async move {
            let mut ticker = interval(self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                debug!("refresh tick");
                self.refresh_all();
            }
        })
    }
}
