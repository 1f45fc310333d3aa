use std::sync::Arc;

use bloodbank_db::DbPool;

use crate::config::ServerConfig;

/// Handler state. Clones share the pool and the loaded config.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Whether approving a request also takes the units out of stock.
    pub fn approval_adjusts_inventory(&self) -> bool {
        self.config.approval_adjusts_inventory
    }
}
