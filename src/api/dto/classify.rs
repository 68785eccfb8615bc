//! DTOs for the classification endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validity::Classification;

/// Candidates to run through the validity filter.
#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(min = 1, message = "At least one candidate is required"))]
    pub candidates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub summary: ClassifySummary,
    pub items: Vec<ClassifyResultItem>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResultItem {
    pub candidate: String,
    pub classification: Classification,
}

#[derive(Debug, Serialize)]
pub struct ClassifySummary {
    pub total: usize,
    pub valid: usize,
    pub fuzzed: usize,
}
