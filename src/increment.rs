use crate::errors::ApiError;
use crate::models::UserId;
use crate::refresh::Refresher;
use crate::ui::Activate;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Handles a tap on a person button.
pub struct IncrementController {
    refresher: Arc<Refresher>,
}

impl IncrementController {
    pub fn new(refresher: Arc<Refresher>) -> Self {
        Self { refresher }
    }

    /// Registers an increment for `user`, tells the user if it did not go
    /// through, then refreshes totals and the last event whatever happened.
    pub async fn activate(&self, user: UserId) -> Result<(), ApiError> {
        let outcome = self.refresher.api().increment(&user).await;
        match &outcome {
            Ok(()) => info!(%user, "increment registered"),
            Err(err @ ApiError::RateLimited { .. }) => {
                warn!(%user, error = %err, "increment rejected by rate limit");
                self.refresher.renderer().notice(&err.notice());
            }
            Err(err) => {
                error!(%user, error = %err, "increment failed");
                self.refresher.renderer().notice(&err.notice());
            }
        }

        self.refresher.spawn_totals();
        self.refresher.spawn_last_event();
        outcome
    }

    /// Click handler factory for the roster buttons. Each activation runs as
    /// its own task.
    pub fn activation(self: &Arc<Self>) -> Activate {
        let controller = Arc::clone(self);
        Arc::new(move |user: UserId| {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                // Already logged and shown as a notice by `activate`.
                let _ = controller.activate(user).await;
            });
        })
    }
}
