use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    datalayer::db_ops::{DbManager, ServerTime, check_database_health, db_health::DatabaseHealth},
    errors::{ServiceError, ServiceResult},
};

pub const ROOT_BANNER: &str = "API de Veterinaria funcionando";

/// Body of GET /test-db
#[derive(Debug, Serialize, Deserialize)]
pub struct TestDbResponse {
    pub message: String,
    pub timestamp: ServerTime,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealth>,
}

/// Plain-text liveness banner served at `/`
pub fn banner() -> &'static str {
    ROOT_BANNER
}

/// Round-trips `SELECT NOW()` through the pool
pub async fn test_db(db: &DbManager) -> ServiceResult<TestDbResponse> {
    let timestamp = db.server_time().await.map_err(|e| {
        error!(error = %e, "Database connectivity test failed");
        ServiceError::DatabaseConnectionError
    })?;

    Ok(TestDbResponse {
        message: "Database connected".to_string(),
        timestamp,
    })
}

/// Returns 200 with pool metrics when the database answers, 503 otherwise
pub async fn health_check(db: &DbManager) -> (StatusCode, HealthResponse) {
    let timestamp = chrono::Utc::now().timestamp();

    let database = match check_database_health(db.pool()).await {
        Ok(health) => Some(health),
        Err(e) => {
            error!(error = %e, "Health check could not reach the database");
            None
        }
    };

    let (status_code, status) = if database.is_some() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp,
        database,
    };

    (status_code, response)
}
