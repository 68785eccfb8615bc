//! Batch aggregation: expand, filter, union, deduplicate, sort.

use crate::catalog::{Batch, TemplateContext, expand_batch};
use crate::domain::entities::{BatchStats, VariantReport, VariantSet};
use crate::error::GeneratorError;
use crate::validity::is_valid_email;

/// Generates the variant set for `collaborator`.
///
/// `target` defaults to `example.com` when absent or blank. The fuzzed batch
/// is only built when `include_fuzzed` is set.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidInput`] if `collaborator` is empty or
/// whitespace-only. Nothing is generated in that case.
///
/// # Examples
///
/// ```
/// use email_variants::generate;
///
/// let variants = generate("abc.oastify.com", None, false).unwrap();
/// assert!(variants.contains("user@abc.oastify.com"));
/// assert!(generate("  ", None, false).is_err());
/// ```
pub fn generate(
    collaborator: &str,
    target: Option<&str>,
    include_fuzzed: bool,
) -> Result<VariantSet, GeneratorError> {
    generate_report(collaborator, target, include_fuzzed).map(|report| report.variants)
}

/// Same as [`generate`], with per-batch filter counts.
pub fn generate_report(
    collaborator: &str,
    target: Option<&str>,
    include_fuzzed: bool,
) -> Result<VariantReport, GeneratorError> {
    if collaborator.trim().is_empty() {
        return Err(GeneratorError::InvalidInput(
            "collaborator domain must not be blank".to_string(),
        ));
    }

    let ctx = TemplateContext::new(collaborator, target);

    let (mut pool, strict) = filter_batch(Batch::Strict, &ctx);

    let fuzzed = if include_fuzzed {
        let (accepted, stats) = filter_batch(Batch::Fuzzed, &ctx);
        pool.extend(accepted);
        Some(stats)
    } else {
        None
    };

    let variants: VariantSet = pool.into_iter().collect();

    tracing::debug!(
        collaborator = %ctx.collaborator,
        target = %ctx.target,
        include_fuzzed,
        total = variants.len(),
        "Generated email variants"
    );

    Ok(VariantReport {
        variants,
        strict,
        fuzzed,
    })
}

/// Expands `batch` and keeps the candidates the validity filter accepts.
fn filter_batch(batch: Batch, ctx: &TemplateContext<'_>) -> (Vec<String>, BatchStats) {
    let candidates = expand_batch(batch, ctx);
    let generated = candidates.len();

    let accepted: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| is_valid_email(candidate))
        .collect();

    let stats = BatchStats {
        generated,
        accepted: accepted.len(),
        rejected: generated - accepted.len(),
    };

    (accepted, stats)
}
