//! Database connection configuration.
//!
//! The connection target is described by exactly four environment variables.
//! Nothing else in the environment affects how the connection handle is built.
//!
//! # Environment Variables
//!
//! - `DB_HOST`: database server host (required)
//! - `DB_NAME`: database/schema name (required)
//! - `DB_USER`: database username (required)
//! - `DB_PASSWORD`: database password (required, may be empty)
//!
//! The server port is always the dialect's default.

use std::env;
use std::fmt;

use crate::{ConfigError, required};

/// SQL dialect spoken by the database server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    MySql,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Dialect::MySql => 3306,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that must never end up in logs.
///
/// `Debug` and `Display` both print `[REDACTED]`; the value is only reachable
/// through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Connection parameters for the application database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database server host.
    pub host: String,

    /// Database (schema) name.
    pub database: String,

    /// Login user.
    pub username: String,

    /// Login password.
    pub password: Secret,

    /// Always [`Dialect::MySql`].
    pub dialect: Dialect,
}

impl DatabaseConfig {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if values live in a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when any of the four variables is unset,
    /// and [`ConfigError::Invalid`] when host, name or user is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: required(&lookup, "DB_HOST")?,
            database: required(&lookup, "DB_NAME")?,
            username: required(&lookup, "DB_USER")?,
            // An empty password is legitimate (e.g. a local root account).
            password: lookup("DB_PASSWORD")
                .map(Secret::new)
                .ok_or(ConfigError::Missing("DB_PASSWORD"))?,
            dialect: Dialect::MySql,
        })
    }

    pub fn port(&self) -> u16 {
        self.dialect.default_port()
    }

    /// Loggable description of the connection target, without the password.
    ///
    /// ```ignore
    /// assert_eq!(config.target(), "root@localhost:3306/inventory");
    /// ```
    pub fn target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.username,
            self.host,
            self.port(),
            self.database
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DB_HOST", "localhost"),
            ("DB_NAME", "inventory"),
            ("DB_USER", "root"),
            ("DB_PASSWORD", "secret"),
        ]
    }

    #[test]
    fn test_from_lookup_complete() {
        let config = DatabaseConfig::from_lookup(lookup_from(&complete())).unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.database, "inventory");
        assert_eq!(config.username, "root");
        assert_eq!(config.password.expose(), "secret");
        assert_eq!(config.dialect, Dialect::MySql);
        assert_eq!(config.port(), 3306);
    }

    #[test]
    fn test_missing_variables_are_named() {
        for var in ["DB_HOST", "DB_NAME", "DB_USER", "DB_PASSWORD"] {
            let pairs: Vec<_> = complete().into_iter().filter(|(k, _)| *k != var).collect();
            let err = DatabaseConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(var));
        }
    }

    #[test]
    fn test_blank_host_is_invalid() {
        let mut pairs = complete();
        pairs[0] = ("DB_HOST", "   ");

        let err = DatabaseConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_HOST", .. }));
    }

    #[test]
    fn test_empty_password_is_allowed() {
        let mut pairs = complete();
        pairs[3] = ("DB_PASSWORD", "");

        let config = DatabaseConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.password.expose(), "");
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut pairs = complete();
        pairs[1] = ("DB_NAME", " inventory\n");

        let config = DatabaseConfig::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.database, "inventory");
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let mut pairs = complete();
        pairs.push(("DB_PORT", "3307"));
        pairs.push(("DB_DIALECT", "postgres"));

        let with_extras = DatabaseConfig::from_lookup(lookup_from(&pairs)).unwrap();
        let without = DatabaseConfig::from_lookup(lookup_from(&complete())).unwrap();
        assert_eq!(with_extras, without);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig::from_lookup(lookup_from(&complete())).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_target_omits_password() {
        let config = DatabaseConfig::from_lookup(lookup_from(&complete())).unwrap();

        assert_eq!(config.target(), "root@localhost:3306/inventory");
    }
}
