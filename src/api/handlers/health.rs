//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Collaborator used for the generator self-check.
const PROBE_COLLABORATOR: &str = "health.invalid";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Generator produced a non-empty strict batch
/// - **503 Service Unavailable**: Generator failed the self-check
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "generator": {
///       "status": "ok",
///       "message": "Strict batch: 30 variants"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let generator_check = check_generator(&state);

    let healthy = generator_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            generator: generator_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Runs a strict-only generation against a reserved domain.
fn check_generator(state: &AppState) -> CheckStatus {
    match state
        .variant_service
        .generate(PROBE_COLLABORATOR, None, Some(false))
    {
        Ok(report) if !report.variants.is_empty() => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Strict batch: {} variants", report.variants.len())),
        },
        Ok(_) => CheckStatus {
            status: "error".to_string(),
            message: Some("Strict batch is empty".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Generator error: {}", e)),
        },
    }
}
