use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use estoque::router::init_router;
use estoque::state::AppState;
use estoque_config::{DatabaseConfig, Dialect, Secret};
use estoque_db::Database;

pub const CHECK_TIMEOUT: Duration = Duration::from_millis(500);

/// Configuration pointing at a host that cannot resolve.
#[allow(dead_code)]
pub fn unreachable_config() -> DatabaseConfig {
    DatabaseConfig {
        host: "nonexistent.invalid".into(),
        database: "inventory".into(),
        username: "root".into(),
        password: Secret::new("secret"),
        dialect: Dialect::MySql,
    }
}

/// Configuration for a live server, read from `TEST_DB_*` variables.
#[allow(dead_code)]
pub fn live_config() -> DatabaseConfig {
    dotenvy::dotenv().ok();
    DatabaseConfig::from_lookup(|key| {
        std::env::var(format!("TEST_{key}"))
            .or_else(|_| std::env::var(key))
            .ok()
    })
    .expect("TEST_DB_HOST, TEST_DB_NAME, TEST_DB_USER and TEST_DB_PASSWORD must be set")
}

#[allow(dead_code)]
pub fn setup_test_app(db: Database) -> axum::Router {
    init_router(AppState::new(db, CHECK_TIMEOUT))
}

/// In-memory sink for formatted `tracing` output.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    /// Installs a plain-text subscriber writing into this buffer for the
    /// current thread until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
