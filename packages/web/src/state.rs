use std::sync::Arc;

use api::Repository;

/// Shared by every handler. Holds no per-user data.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(repo: impl Repository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}
