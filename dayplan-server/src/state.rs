use anyhow::Result;
use dayplan_core::Store;
use dayplan_core::config::GlobalConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // The store re-reads the filesystem on each request, so CLI writes
    // next to a running server are picked up immediately.
    pub store: Store,
}

impl AppState {
    pub fn new(config: &GlobalConfig) -> Result<AppState> {
        let store = Store::open(&config.data_dir)?;
        Ok(AppState { store })
    }
}
