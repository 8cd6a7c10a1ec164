//! # Estoque Config
//!
//! Configuration types for the Estoque API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`database`]: MySQL connection parameters (`DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`)
//! - [`server`]: HTTP bind address and database startup policy
//!
//! Every config type exposes `from_env()` for production use and `from_lookup()`
//! which takes a key lookup function, so tests never have to mutate the process
//! environment.
//!
//! # Example
//!
//! ```ignore
//! use estoque_config::{DatabaseConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let db_config = DatabaseConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod database;
pub mod error;
pub mod server;

// Re-export commonly used types at crate root
pub use database::{DatabaseConfig, Dialect, Secret};
pub use error::ConfigError;
pub use server::{ServerConfig, StartupPolicy};

/// Reads a required variable, rejecting values that are blank after trimming.
pub(crate) fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).ok_or(ConfigError::Missing(var))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid {
            var,
            reason: "must not be empty".into(),
        });
    }
    Ok(trimmed.to_string())
}
