//! Template catalog of address syntax categories.
//!
//! Every [`Category`] expands to a finite list of candidates over the
//! collaborator and target domains. Categories never read each other's
//! output, so adding one leaves the rest of the catalog untouched.
//!
//! # Batches
//!
//! - [`Batch::Strict`] - basic, quoted, comment and domain literal forms
//! - [`Batch::Fuzzed`] - everything else: case, routing, specials, length,
//!   encoded words, IDN, overflow, injection and whitespace forms

mod fuzz;
mod legacy;
mod rfc5322;

/// Domain substituted when the caller supplies no target.
pub const DEFAULT_TARGET_DOMAIN: &str = "example.com";

/// Domains substituted into the templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub collaborator: &'a str,
    pub target: &'a str,
}

impl<'a> TemplateContext<'a> {
    /// Builds a context, falling back to [`DEFAULT_TARGET_DOMAIN`] when the
    /// target is absent or blank.
    pub fn new(collaborator: &'a str, target: Option<&'a str>) -> Self {
        let target = target
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TARGET_DOMAIN);

        Self {
            collaborator,
            target,
        }
    }
}

/// Which half of the generation a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Batch {
    Strict,
    Fuzzed,
}

/// Address syntax categories, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Basic,
    Quoted,
    Comments,
    DomainLiterals,
    CaseVariants,
    LegacyRouting,
    SpecialCharacters,
    LengthBoundary,
    EncodedWords,
    International,
    UnicodeOverflow,
    Injection,
    Whitespace,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Basic,
        Category::Quoted,
        Category::Comments,
        Category::DomainLiterals,
        Category::CaseVariants,
        Category::LegacyRouting,
        Category::SpecialCharacters,
        Category::LengthBoundary,
        Category::EncodedWords,
        Category::International,
        Category::UnicodeOverflow,
        Category::Injection,
        Category::Whitespace,
    ];

    pub fn batch(self) -> Batch {
        match self {
            Category::Basic | Category::Quoted | Category::Comments | Category::DomainLiterals => {
                Batch::Strict
            }
            _ => Batch::Fuzzed,
        }
    }

    /// Expands the category's templates for `ctx`.
    pub fn expand(self, ctx: &TemplateContext<'_>) -> Vec<String> {
        match self {
            Category::Basic => rfc5322::basic(ctx),
            Category::Quoted => rfc5322::quoted(ctx),
            Category::Comments => rfc5322::comments(ctx),
            Category::DomainLiterals => rfc5322::domain_literals(ctx),
            Category::CaseVariants => rfc5322::case_variants(ctx),
            Category::LegacyRouting => legacy::routing(ctx),
            Category::SpecialCharacters => fuzz::special_characters(ctx),
            Category::LengthBoundary => fuzz::length_boundary(ctx),
            Category::EncodedWords => legacy::encoded_words(ctx),
            Category::International => legacy::international(ctx),
            Category::UnicodeOverflow => fuzz::unicode_overflow(ctx),
            Category::Injection => fuzz::injection(ctx),
            Category::Whitespace => fuzz::whitespace(ctx),
        }
    }
}

/// Categories belonging to `batch`, in catalog order.
pub fn categories(batch: Batch) -> impl Iterator<Item = Category> {
    Category::ALL.into_iter().filter(move |c| c.batch() == batch)
}

/// Expands every category of `batch` into one candidate list.
///
/// The list may contain duplicates; deduplication is the aggregator's job.
pub fn expand_batch(batch: Batch, ctx: &TemplateContext<'_>) -> Vec<String> {
    categories(batch).flat_map(|c| c.expand(ctx)).collect()
}

/// Wraps `payload` in an RFC 5322 comment.
///
/// The validity filter strips comments, so a payload carried this way keeps
/// the surrounding address valid. The payload must not contain `)`.
fn comment(payload: &str) -> String {
    format!("({payload})")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLAB: &str = "abc.oastify.com";

    #[test]
    fn test_default_target() {
        assert_eq!(TemplateContext::new(COLLAB, None).target, "example.com");
        assert_eq!(TemplateContext::new(COLLAB, Some("")).target, "example.com");
        assert_eq!(TemplateContext::new(COLLAB, Some("  ")).target, "example.com");
        assert_eq!(TemplateContext::new(COLLAB, Some("t.io")).target, "t.io");
    }

    #[test]
    fn test_batch_membership() {
        let strict: Vec<_> = categories(Batch::Strict).collect();
        assert_eq!(
            strict,
            vec![
                Category::Basic,
                Category::Quoted,
                Category::Comments,
                Category::DomainLiterals
            ]
        );
        assert_eq!(categories(Batch::Fuzzed).count(), Category::ALL.len() - 4);
    }

    #[test]
    fn test_every_category_non_empty() {
        let ctx = TemplateContext::new(COLLAB, None);
        for category in Category::ALL {
            assert!(!category.expand(&ctx).is_empty(), "{category:?}");
        }
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let ctx = TemplateContext::new(COLLAB, Some("t.io"));
        for category in Category::ALL {
            assert_eq!(category.expand(&ctx), category.expand(&ctx));
        }
    }

    #[test]
    fn test_batch_is_concatenation_of_categories() {
        let ctx = TemplateContext::new(COLLAB, None);
        let expected: Vec<String> = categories(Batch::Fuzzed)
            .flat_map(|c| c.expand(&ctx))
            .collect();
        assert_eq!(expand_batch(Batch::Fuzzed, &ctx), expected);
    }

    #[test]
    fn test_strict_candidates_carry_collaborator() {
        let ctx = TemplateContext::new(COLLAB, None);
        for candidate in expand_batch(Batch::Strict, &ctx) {
            let domain = candidate.rsplit('@').next().unwrap_or_default();
            let literal = domain.starts_with('[') || domain == "localhost";
            assert!(
                candidate.contains(COLLAB) || literal,
                "{candidate} lacks collaborator"
            );
        }
    }
}
