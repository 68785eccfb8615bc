//! API route configuration.

use crate::api::handlers::{classify_handler, export_handler, variants_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /variants`         - Generate the variant list as JSON
/// - `GET  /variants/export`  - Generate the variant list as plain text
/// - `POST /classify`         - Classify arbitrary candidates
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/variants", post(variants_handler))
        .route("/variants/export", get(export_handler))
        .route("/classify", post(classify_handler))
}
