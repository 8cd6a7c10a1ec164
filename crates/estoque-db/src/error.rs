use std::time::Duration;

use sqlx::error::DatabaseError;
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// `ER_DBACCESS_DENIED_ERROR`: user may not access the requested database.
const ER_DBACCESS_DENIED: u16 = 1044;
/// `ER_ACCESS_DENIED_ERROR`: wrong user name or password.
const ER_ACCESS_DENIED: u16 = 1045;
/// SQLSTATE class for invalid authorization specification.
const SQLSTATE_INVALID_AUTHORIZATION: &str = "28000";

/// Outcome of a failed connectivity probe.
#[derive(Debug, Error)]
pub enum DbError {
    /// The server rejected the credentials or the database grant.
    #[error("authentication denied: {0}")]
    AuthenticationDenied(#[source] sqlx::Error),

    /// No connection could be opened (DNS, refused, TLS, pool exhausted).
    #[error("database unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),

    /// The probe did not complete within the configured bound.
    #[error("connectivity probe timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with an error unrelated to authentication.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error(transparent)]
    Other(sqlx::Error),
}

impl DbError {
    pub fn is_authentication_denied(&self) -> bool {
        matches!(self, DbError::AuthenticationDenied(_))
    }

    /// Short machine-readable tag, used in health responses and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DbError::AuthenticationDenied(_) => "authentication_denied",
            DbError::Unreachable(_) => "unreachable",
            DbError::Timeout(_) => "timeout",
            DbError::Database(_) => "database",
            DbError::Other(_) => "other",
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if is_access_denied(db.as_ref()) => {
                DbError::AuthenticationDenied(err)
            }
            sqlx::Error::Database(_) => DbError::Database(err),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => DbError::Unreachable(err),
            _ => DbError::Other(err),
        }
    }
}

fn is_access_denied(err: &dyn DatabaseError) -> bool {
    if let Some(mysql) = err.try_downcast_ref::<MySqlDatabaseError>() {
        if matches!(mysql.number(), ER_ACCESS_DENIED | ER_DBACCESS_DENIED) {
            return true;
        }
    }
    err.code().as_deref() == Some(SQLSTATE_INVALID_AUTHORIZATION)
}
