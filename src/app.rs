use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::increment::IncrementController;
use crate::refresh::Refresher;
use crate::scheduler::RefreshScheduler;
use crate::surface::Surface;
use crate::ui::Renderer;
use std::sync::Arc;

/// Wires the dashboard onto `surface`. Nothing runs until the returned
/// scheduler is started.
pub fn dashboard(config: &DashboardConfig, surface: Arc<dyn Surface>) -> RefreshScheduler {
    let api = ApiClient::new(config.counter_url.clone());
    let renderer = Renderer::new(Arc::clone(&surface), config.recency);
    let refresher = Arc::new(Refresher::new(api, renderer));
    let controller = Arc::new(IncrementController::new(Arc::clone(&refresher)));

    let host = Arc::downgrade(&surface);
    surface.bind_body_click(Arc::new(move || {
        if let Some(host) = host.upgrade() {
            host.request_fullscreen();
        }
    }));

    RefreshScheduler::new(refresher, controller, config.refresh_interval)
}
