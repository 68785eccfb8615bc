//! Generation results.

use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Deref;

use crate::encoding::line_safe;

/// Unique candidates in ascending code-point order.
///
/// Built in one step from a [`BTreeSet`], so the order depends only on the
/// contents and never on the order templates were expanded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantSet(Vec<String>);

impl VariantSet {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(candidate))
            .is_ok()
    }

    /// Plain-text rendering, one variant per line.
    ///
    /// Line breaks inside a variant are percent-encoded with
    /// [`line_safe`], so the line count always equals the variant count.
    pub fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|variant| line_safe(variant))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<String> for VariantSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let unique: BTreeSet<String> = iter.into_iter().collect();
        Self(unique.into_iter().collect())
    }
}

impl Deref for VariantSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Filter outcome for one batch, counted before global deduplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub generated: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// A generation's variants together with per-batch counts.
///
/// `fuzzed` is `None` when the fuzzed batch was not requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantReport {
    pub variants: VariantSet,
    pub strict: BatchStats,
    pub fuzzed: Option<BatchStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_set_dedups_and_sorts() {
        let set: VariantSet = ["b", "a", "B", "a"].into_iter().map(String::from).collect();
        assert_eq!(&set[..], ["B", "a", "b"]);
    }

    #[test]
    fn test_variant_set_code_point_order() {
        let set: VariantSet = ["é", "z", "\"q"].into_iter().map(String::from).collect();
        assert_eq!(&set[..], ["\"q", "z", "é"]);
    }

    #[test]
    fn test_variant_set_contains() {
        let set: VariantSet = ["x@a.io", "y@a.io"].into_iter().map(String::from).collect();
        assert!(set.contains("y@a.io"));
        assert!(!set.contains("z@a.io"));
    }

    #[test]
    fn test_to_text_one_line_per_variant() {
        let set: VariantSet = ["user(\r\nBcc:x@a.io)@a.io", "x@a.io"]
            .into_iter()
            .map(String::from)
            .collect();
        let text = set.to_text();
        assert_eq!(text.lines().count(), set.len());
        assert_eq!(text, "user(%0d%0aBcc:x@a.io)@a.io\nx@a.io");
    }

    #[test]
    fn test_empty_set() {
        let set = VariantSet::default();
        assert!(set.is_empty());
        assert!(set.into_vec().is_empty());
    }
}
