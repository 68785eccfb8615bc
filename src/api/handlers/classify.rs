//! Handler for candidate classification.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::classify::{
    ClassifyRequest, ClassifyResponse, ClassifyResultItem, ClassifySummary,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::validity::Classification;

/// Runs each candidate through the validity filter.
///
/// # Endpoint
///
/// `POST /api/classify`
///
/// # Request Body
///
/// ```json
/// { "candidates": ["user@abc.oastify.com", "\"user\"@abc.oastify.com"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "valid": 1, "fuzzed": 1 },
///   "items": [
///     { "candidate": "user@abc.oastify.com", "classification": "valid" },
///     { "candidate": "\"user\"@abc.oastify.com", "classification": "fuzzed" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty or exceeds the configured
/// maximum.
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    payload.validate()?;

    if payload.candidates.len() > state.max_classify_batch {
        return Err(AppError::bad_request(
            "Too many candidates",
            json!({
                "provided": payload.candidates.len(),
                "max": state.max_classify_batch,
            }),
        ));
    }

    let items: Vec<ClassifyResultItem> = state
        .variant_service
        .classify_all(&payload.candidates)
        .into_iter()
        .map(|(candidate, classification)| ClassifyResultItem {
            candidate: candidate.to_string(),
            classification,
        })
        .collect();

    let valid = items
        .iter()
        .filter(|item| item.classification == Classification::Valid)
        .count();

    Ok(Json(ClassifyResponse {
        summary: ClassifySummary {
            total: items.len(),
            valid,
            fuzzed: items.len() - valid,
        },
        items,
    }))
}
