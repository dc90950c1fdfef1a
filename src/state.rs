use crate::models::ViewState;
use crate::storage::DocumentStore;
use crate::visitors::load_view;
use crate::week::current_week_number;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub recent_weeks: u32,
    pub view: Arc<RwLock<ViewState>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, recent_weeks: u32) -> Self {
        let view = ViewState {
            current_week: current_week_number(),
            ..Default::default()
        };
        Self {
            store,
            recent_weeks,
            view: Arc::new(RwLock::new(view)),
        }
    }

    /// Re-fetches and re-classifies visitors. When the store fails the last
    /// good view is kept and returned.
    pub async fn refresh(&self) -> ViewState {
        self.refresh_for(current_week_number()).await
    }

    pub async fn refresh_for(&self, week: u32) -> ViewState {
        match load_view(self.store.as_ref(), week, self.recent_weeks).await {
            Ok(view) => {
                *self.view.write().await = view.clone();
                view
            }
            Err(err) => {
                error!("failed to fetch visitors: {err}");
                self.view.read().await.clone()
            }
        }
    }
}
