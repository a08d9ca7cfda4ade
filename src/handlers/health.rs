use crate::controllayer::health;
use crate::errors::ServiceResult;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, instrument};

/// GET /
#[instrument]
pub async fn root() -> &'static str {
    health::banner()
}

/// GET /test-db
#[instrument(skip(state), fields(service = "/test-db"))]
pub async fn test_db(State(state): State<AppState>) -> ServiceResult<Json<health::TestDbResponse>> {
    info!("Database connectivity test requested");
    let response = health::test_db(&state.db).await?;
    Ok(Json(response))
}

/// GET /health
#[instrument(skip(state), fields(service = "/health"))]
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<health::HealthResponse>) {
    let (status, response) = health::health_check(&state.db).await;
    info!(status = %status, "Health check completed");
    (status, Json(response))
}
