//! Best-effort RFC 5322 acceptance test.
//!
//! The filter approximates the dot-atom grammar only. Quoted local parts,
//! IP literals and internationalized domains are rejected even though they
//! are legal addresses, which decides the strict/fuzzed split downstream.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Dot-atom local part, dotted domain, alphabetic TLD of two or more letters.
static RFC_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Tab through CR, the space separators, U+2028, U+2029 and U+FEFF.
/// U+0085 and U+200B are not stripped.
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .unwrap()
});

/// Non-nested comment, shortest match.
static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Result of running a candidate through [`is_valid_email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Valid,
    Fuzzed,
}

/// Returns true if `candidate` passes the approximate grammar once
/// whitespace and comments are removed.
///
/// # Examples
///
/// ```
/// use email_variants::validity::is_valid_email;
///
/// assert!(is_valid_email("user(comment)@abc.oastify.com"));
/// assert!(!is_valid_email("\"user\"@abc.oastify.com"));
/// assert!(!is_valid_email("user@[127.0.0.1]"));
/// ```
pub fn is_valid_email(candidate: &str) -> bool {
    let without_whitespace = WHITESPACE_REGEX.replace_all(candidate, "");
    let cleaned = COMMENT_REGEX.replace_all(&without_whitespace, "");
    RFC_EMAIL_REGEX.is_match(&cleaned)
}

/// Tags `candidate` with its classification.
pub fn classify(candidate: &str) -> Classification {
    if is_valid_email(candidate) {
        Classification::Valid
    } else {
        Classification::Fuzzed
    }
}
