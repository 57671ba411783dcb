use cw_sync::SyncCoordinator;

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<SyncCoordinator>,
}

impl AppState {
    pub fn new(coordinator: SyncCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }
}
