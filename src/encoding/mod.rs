//! Pure string transforms used by the template catalog.
//!
//! None of these functions fail. Anomalies degrade locally so that one bad
//! template never blocks the rest of a batch:
//!
//! - [`payload::base64_encode`] - returns an empty string for payloads outside
//!   the single-byte range and logs a warning
//! - [`encoded_word::encoded_word`] - assembles RFC 2047 tokens without
//!   validating charset or encoding
//! - [`punycode::punycode_lookup`] - fixed four-entry table, passes unknown
//!   labels through unchanged
//! - [`overflow::unicode_overflow`] - code point aliases of a character
//! - [`line::line_safe`] - single-line rendering for plain-text output

pub mod encoded_word;
pub mod line;
pub mod overflow;
pub mod payload;
pub mod punycode;

pub use encoded_word::encoded_word;
pub use line::line_safe;
pub use overflow::{OVERFLOW_BASES, unicode_overflow};
pub use payload::base64_encode;
pub use punycode::{UNICODE_LABELS, punycode_lookup};
