//! Startup handling of the database connectivity probe.
//!
//! The probe itself lives in [`estoque_db`]; this module decides what a failed
//! probe means for the process according to the configured [`StartupPolicy`].

use std::time::Duration;

use estoque_config::StartupPolicy;
use estoque_db::{Database, DbError, spawn_connectivity_probe};
use tracing::{info, warn};

/// Applies `policy` to the startup connectivity probe.
///
/// - [`StartupPolicy::FailFast`]: the probe error is returned to the caller.
/// - [`StartupPolicy::Degrade`]: the probe is awaited, a failure is logged and swallowed.
/// - [`StartupPolicy::Background`]: the probe is spawned and this returns immediately.
pub async fn check_database(
    db: &Database,
    policy: StartupPolicy,
    timeout: Duration,
) -> Result<(), DbError> {
    info!(policy = %policy, timeout_ms = timeout.as_millis() as u64, "Checking database connectivity");

    match policy {
        StartupPolicy::FailFast => db.verify_connectivity_within(timeout).await,
        StartupPolicy::Degrade => {
            if let Err(err) = db.verify_connectivity_within(timeout).await {
                warn!(kind = err.kind(), "Continuing without database connectivity");
            }
            Ok(())
        }
        StartupPolicy::Background => {
            // Outcome is logged by the probe task.
            let _probe = spawn_connectivity_probe(db.clone(), timeout);
            Ok(())
        }
    }
}
