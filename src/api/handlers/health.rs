/*
 * Responsibility
 * - GET /health (疎通用)
 * - OpenAPI 上は tag "healthcheck" として公開
 */
use axum::{Json, http::StatusCode};

use crate::api::dto::health::HealthCheck;

/// Perform a Health Check
///
/// Endpoint to perform a healthcheck on.
#[utoipa::path(
    get,
    path = "/health",
    tag = "healthcheck",
    responses(
        (status = OK, description = "Return HTTP Status Code 200 (OK)", body = HealthCheck)
    )
)]
pub async fn health() -> (StatusCode, Json<HealthCheck>) {
    (StatusCode::OK, Json(HealthCheck::default()))
}
