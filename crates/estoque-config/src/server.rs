//! Server and startup configuration.
//!
//! # Environment Variables
//!
//! - `SERVER_ADDR`: HTTP bind address (default: `0.0.0.0:3000`)
//! - `DB_STARTUP_POLICY`: `fail-fast`, `degrade` or `background` (default: `degrade`)
//! - `DB_PROBE_TIMEOUT_SECS`: connectivity probe timeout in seconds (default: `5`)

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::ConfigError;

const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// What the process does when the startup connectivity probe fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartupPolicy {
    /// Await the probe and abort startup on failure.
    FailFast,
    /// Await the probe, log a failure and keep serving.
    #[default]
    Degrade,
    /// Spawn the probe and start serving immediately.
    Background,
}

impl StartupPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            StartupPolicy::FailFast => "fail-fast",
            StartupPolicy::Degrade => "degrade",
            StartupPolicy::Background => "background",
        }
    }
}

impl fmt::Display for StartupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "fail-fast" => Ok(StartupPolicy::FailFast),
            "degrade" => Ok(StartupPolicy::Degrade),
            "background" => Ok(StartupPolicy::Background),
            other => Err(format!(
                "unknown startup policy `{other}` (expected fail-fast, degrade or background)"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,

    /// Reaction to a failed startup connectivity probe.
    pub startup_policy: StartupPolicy,

    /// Upper bound for a single connectivity probe.
    pub probe_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup("SERVER_ADDR") {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
                var: "SERVER_ADDR",
                reason: format!("{e}"),
            })?,
            None => default_addr(),
        };

        let startup_policy = match lookup("DB_STARTUP_POLICY") {
            Some(raw) => raw.parse::<StartupPolicy>().map_err(|reason| ConfigError::Invalid {
                var: "DB_STARTUP_POLICY",
                reason,
            })?,
            None => StartupPolicy::default(),
        };

        let probe_timeout = match lookup("DB_PROBE_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        };

        Ok(Self {
            addr,
            startup_policy,
            probe_timeout,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            startup_policy: StartupPolicy::default(),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
        var: "DB_PROBE_TIMEOUT_SECS",
        reason: format!("{e}"),
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var: "DB_PROBE_TIMEOUT_SECS",
            reason: "must be greater than zero".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}
