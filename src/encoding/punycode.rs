//! Fixed punycode table for the sample internationalized labels.
//!
//! This is a lookup, not an IDNA encoder. Only the four labels below are
//! known; every other input is returned unchanged.

/// Unicode sample labels with their ACE forms.
const PUNYCODE_TABLE: &[(&str, &str)] = &[
    ("exämple", "xn--exmple-cua"),
    ("例子", "xn--fsqu00a"),
    ("пример", "xn--e1afmkfd"),
    ("münchen", "xn--mnchen-3ya"),
];

/// The Unicode labels the table knows about, in table order.
pub const UNICODE_LABELS: [&str; 4] = ["exämple", "例子", "пример", "münchen"];

/// Returns the punycode form of `label`, or `label` itself on a table miss.
pub fn punycode_lookup(label: &str) -> String {
    PUNYCODE_TABLE
        .iter()
        .find(|(unicode, _)| *unicode == label)
        .map_or(label, |(_, ace)| *ace)
        .to_string()
}
