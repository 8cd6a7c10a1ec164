use estoque_db::DbError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    Reachable,
    Unreachable,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub database: DatabaseStatus,
    /// Failure category, e.g. `authentication_denied` or `timeout`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn reachable() -> Self {
        Self {
            status: ServiceStatus::Ok,
            database: DatabaseStatus::Reachable,
            kind: None,
            error: None,
        }
    }

    pub fn unreachable(err: &DbError) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            database: DatabaseStatus::Unreachable,
            kind: Some(err.kind().to_string()),
            error: Some(err.to_string()),
        }
    }
}
