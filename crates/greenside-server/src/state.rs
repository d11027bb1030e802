use std::sync::Arc;
use tokio::sync::RwLock;

use greenside_core::records::Records;
use greenside_core::store::RecordStore;

use crate::config::ServerConfig;

/// Records over whichever store the server was started with.
pub type SharedRecords = Arc<RwLock<Records<Box<dyn RecordStore>>>>;

#[derive(Clone)]
pub struct AppState {
    pub records: SharedRecords,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, records: Records<Box<dyn RecordStore>>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            config: Arc::new(config),
        }
    }
}
