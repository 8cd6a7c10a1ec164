use std::time::Duration;

use estoque_db::Database;

/// State shared by every request handler.
///
/// Holds the single process-wide [`Database`] handle; cloning the state clones
/// the handle, which shares the same pool.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub probe_timeout: Duration,
}

impl AppState {
    pub fn new(db: Database, probe_timeout: Duration) -> Self {
        Self { db, probe_timeout }
    }
}
