//! RFC 2047 encoded-word assembly.

/// Builds `=?charset?encoding?payload?=`.
///
/// No part is validated. Unknown charsets, lowercase encodings and empty
/// payloads are all accepted so that malformed words can probe decoder
/// leniency.
pub fn encoded_word(charset: &str, encoding: &str, payload: &str) -> String {
    format!("=?{charset}?{encoding}?{payload}?=")
}
