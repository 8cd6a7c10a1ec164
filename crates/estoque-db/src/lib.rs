//! # Estoque DB
//!
//! MySQL connection handle for the Estoque API.
//!
//! Bootstrapping happens in two phases that never gate each other:
//!
//! 1. [`Database::initialize`] builds the handle. It is synchronous, cannot
//!    fail and opens no sockets; connections are established lazily on first use.
//! 2. [`Database::verify_connectivity`] (or the bounded
//!    [`Database::verify_connectivity_within`]) opens a dedicated connection
//!    with the pool's options and pings the server, returning a typed
//!    [`DbError`] on failure. The caller decides what a failure means for the
//!    process.
//!
//! The check never goes through the pool, so a refused or unresolvable host
//! surfaces at once as [`DbError::Unreachable`] carrying the I/O error.
//!
//! The handle is constructed once at process entry and passed explicitly to
//! every consumer. Clones share the same underlying pool.
//!
//! # Example
//!
//! ```ignore
//! use estoque_config::DatabaseConfig;
//! use estoque_db::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::initialize(&config);
//!     db.verify_connectivity().await?;
//!     Ok(())
//! }
//! ```

pub mod error;

use std::time::Duration;

use estoque_config::DatabaseConfig;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions};
use tokio::task::JoinHandle;
use tracing::{error, info};

pub use error::DbError;

// Re-export MySqlPool for convenience
pub use sqlx::MySqlPool;

/// Shared connection handle wrapping a pool of MySQL connections.
#[derive(Clone, Debug)]
pub struct Database {
    pool: MySqlPool,
    options: MySqlConnectOptions,
    target: String,
}

impl Database {
    /// Builds the connection handle from configuration.
    ///
    /// No network I/O happens here, so this succeeds whether or not the server
    /// is reachable. It must be called from within a Tokio runtime because the
    /// pool spawns its idle-connection reaper.
    pub fn initialize(config: &DatabaseConfig) -> Self {
        let options = connect_options(config);
        let pool = MySqlPoolOptions::new().connect_lazy_with(options.clone());
        let target = config.target();

        info!(
            target_db = %target,
            dialect = %config.dialect,
            "Database handle initialized"
        );

        Self {
            pool,
            options,
            target,
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// `user@host:port/database`, safe to log.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Opens a fresh connection, pings the server and closes it again.
    ///
    /// Logs the outcome exactly once: `info` on success, `error` with the
    /// cause on failure.
    pub async fn verify_connectivity(&self) -> Result<(), DbError> {
        let result = self.ping().await;
        self.report(&result);
        result
    }

    /// Same as [`verify_connectivity`](Self::verify_connectivity), bounded by `timeout`.
    pub async fn verify_connectivity_within(&self, timeout: Duration) -> Result<(), DbError> {
        let result = match tokio::time::timeout(timeout, self.ping()).await {
            Ok(result) => result,
            Err(_) => Err(DbError::Timeout(timeout)),
        };
        self.report(&result);
        result
    }

    /// Closes every pooled connection. Observed by all clones of this handle.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = MySqlConnection::connect_with(&self.options).await?;
        conn.ping().await?;
        conn.close().await?;
        Ok(())
    }

    fn report(&self, result: &Result<(), DbError>) {
        match result {
            Ok(()) => info!(target_db = %self.target, "Connected to database"),
            Err(err) => error!(
                target_db = %self.target,
                kind = err.kind(),
                error = %err,
                "Unable to connect to database"
            ),
        }
    }
}

/// Runs a bounded connectivity probe on a background task.
///
/// The caller gets the join handle back immediately; the outcome is logged when
/// the probe finishes, which is always after this function has returned.
pub fn spawn_connectivity_probe(db: Database, timeout: Duration) -> JoinHandle<Result<(), DbError>> {
    tokio::spawn(async move { db.verify_connectivity_within(timeout).await })
}

/// Translates configuration into MySQL connect options.
///
/// Only host, database, username and password are read; the port is the
/// dialect default.
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port())
        .username(&config.username)
        .password(config.password.expose())
        .database(&config.database)
}
