//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db::DbPool, error::AppError};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Probes database connectivity with a trivial query. Returns 200 with a
/// JSON body when healthy; an unreachable database surfaces as the standard
/// error response.
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
