//! Handlers for variant generation.

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::variants::{VariantsRequest, VariantsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Generates the variant list for a collaborator domain.
///
/// # Endpoint
///
/// `POST /api/variants`
///
/// # Request Body
///
/// ```json
/// {
///   "collaborator": "abc.oastify.com",
///   "target_domain": "example.com",  // optional
///   "include_fuzzed": true           // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": {
///     "total": 118,
///     "strict": { "generated": 45, "accepted": 30, "rejected": 15 },
///     "fuzzed": { "generated": 190, "accepted": 95, "rejected": 95 }
///   },
///   "variants": ["!user@abc.oastify.com", "..."]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the collaborator is blank.
pub async fn variants_handler(
    State(state): State<AppState>,
    Json(payload): Json<VariantsRequest>,
) -> Result<Json<VariantsResponse>, AppError> {
    payload.validate()?;

    let report = state.variant_service.generate(
        &payload.collaborator,
        payload.target_domain.as_deref(),
        payload.include_fuzzed,
    )?;

    Ok(Json(VariantsResponse::from(report)))
}

/// Returns the variant list as plain text, one address per line.
///
/// CR and LF inside a variant are written as `%0d` and `%0a` so that no
/// variant spans two lines.
///
/// # Endpoint
///
/// `GET /api/variants/export?collaborator=abc.oastify.com&include_fuzzed=true`
///
/// Takes the same parameters as [`variants_handler`].
pub async fn export_handler(
    State(state): State<AppState>,
    Query(params): Query<VariantsRequest>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    let report = state.variant_service.generate(
        &params.collaborator,
        params.target_domain.as_deref(),
        params.include_fuzzed,
    )?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.variants.to_text(),
    ))
}
