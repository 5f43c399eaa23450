use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::ui::{Activate, Renderer};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The three read routines. A failed fetch returns early and leaves whatever
/// was rendered before in place.
#[derive(Clone)]
pub struct Refresher {
    api: ApiClient,
    renderer: Renderer,
}

impl Refresher {
    pub fn new(api: ApiClient, renderer: Renderer) -> Self {
        Self { api, renderer }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub async fn totals(&self) -> Result<(), ApiError> {
        let totals = self.api.get_totals().await?;
        debug!(today = totals.today, this_week = totals.this_week, "totals refreshed");
        self.renderer.totals(&totals);
        Ok(())
    }

    pub async fn last_event(&self) -> Result<(), ApiError> {
        let last = self.api.get_last_event().await?;
        let shown = self.renderer.last_event(&last);
        debug!(elapsed = last.elapsed, text = %shown.text, "last event refreshed");
        Ok(())
    }

    pub async fn persons(&self, activate: &Activate) -> Result<(), ApiError> {
        let roster = self.api.get_users().await?;
        debug!(users = roster.len(), "roster refreshed");
        self.renderer.roster(&roster, activate);
        Ok(())
    }

    pub fn spawn_totals(self: &Arc<Self>) -> JoinHandle<()> {
        let refresher = Arc::clone(self);
        spawn_routine("totals", async move { refresher.totals().await })
    }

    pub fn spawn_last_event(self: &Arc<Self>) -> JoinHandle<()> {
        let refresher = Arc::clone(self);
        spawn_routine("last", async move { refresher.last_event().await })
    }

    pub fn spawn_persons(self: &Arc<Self>, activate: Activate) -> JoinHandle<()> {
        let refresher = Arc::clone(self);
        spawn_routine("persons", async move { refresher.persons(&activate).await })
    }
}

/// Runs a routine as its own task. Its failure is logged and dropped here.
fn spawn_routine<F>(routine: &'static str, work: F) -> JoinHandle<()>
where
    F: Future<Output = Result<(), ApiError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = work.await {
            warn!(routine, error = %err, "refresh failed, keeping previous display");
        }
    })
}
