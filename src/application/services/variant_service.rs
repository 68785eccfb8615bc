//! Variant generation service.

use crate::domain::{VariantReport, generate_report};
use crate::error::GeneratorError;
use crate::validity::{Classification, classify};

/// Applies caller-facing defaults around [`generate_report`].
///
/// Inputs arriving from forms and query strings are trimmed here, so the
/// core generator only ever sees the domains as typed minus surrounding
/// whitespace.
#[derive(Debug, Clone, Default)]
pub struct VariantService {
    include_fuzzed_default: bool,
}

impl VariantService {
    /// Creates a service.
    ///
    /// # Arguments
    ///
    /// - `include_fuzzed_default` - fuzz toggle used when a request leaves it
    ///   unset
    pub fn new(include_fuzzed_default: bool) -> Self {
        Self {
            include_fuzzed_default,
        }
    }

    /// Generates variants for one request.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidInput`] if `collaborator` is blank.
    pub fn generate(
        &self,
        collaborator: &str,
        target: Option<&str>,
        include_fuzzed: Option<bool>,
    ) -> Result<VariantReport, GeneratorError> {
        let collaborator = collaborator.trim();
        let target = target.map(str::trim);
        let include_fuzzed = include_fuzzed.unwrap_or(self.include_fuzzed_default);

        let report = generate_report(collaborator, target, include_fuzzed).inspect_err(|e| {
            tracing::warn!("Rejected generation request: {}", e);
        })?;

        tracing::info!(
            collaborator,
            include_fuzzed,
            total = report.variants.len(),
            "Generated variants"
        );

        Ok(report)
    }

    /// Classifies each candidate independently, preserving input order.
    pub fn classify_all<'a>(
        &self,
        candidates: &'a [String],
    ) -> Vec<(&'a str, Classification)> {
        candidates
            .iter()
            .map(|candidate| (candidate.as_str(), classify(candidate)))
            .collect()
    }
}
