//! DTOs for variant generation endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{BatchStats, VariantReport};

/// Request to generate variants for a collaborator domain.
///
/// Also used as the query string of the plain-text export endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct VariantsRequest {
    /// Out-of-band callback domain. Trimmed before use; blank values are
    /// rejected by the generator.
    #[validate(length(min = 1, max = 253, message = "Collaborator domain must be 1-253 characters"))]
    pub collaborator: String,

    /// Domain used by the legacy routing templates (defaults to `example.com`).
    #[validate(length(max = 253))]
    pub target_domain: Option<String>,

    /// Include the valid subset of the fuzzed batch. Falls back to the
    /// configured default when omitted.
    pub include_fuzzed: Option<bool>,
}

/// Generation result with per-batch counts.
#[derive(Debug, Serialize)]
pub struct VariantsResponse {
    pub summary: VariantsSummary,
    pub variants: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VariantsSummary {
    pub total: usize,
    pub strict: BatchStats,
    pub fuzzed: Option<BatchStats>,
}

impl From<VariantReport> for VariantsResponse {
    fn from(report: VariantReport) -> Self {
        Self {
            summary: VariantsSummary {
                total: report.variants.len(),
                strict: report.strict,
                fuzzed: report.fuzzed,
            },
            variants: report.variants.into_vec(),
        }
    }
}
