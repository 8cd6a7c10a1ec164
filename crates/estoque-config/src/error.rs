use thiserror::Error;

/// Errors raised while loading configuration from the environment.
///
/// Values are never echoed back in the message, since some of them
/// (`DB_PASSWORD`) are secrets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable `{0}` must be set")]
    Missing(&'static str),

    #[error("environment variable `{var}` is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}
