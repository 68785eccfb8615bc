//! Base64 encoding of encoded-word payloads.

use base64::Engine as _;

/// Encodes `text` with the standard padded base64 alphabet.
///
/// Every character is taken as a single byte, so only code points up to
/// `U+00FF` can be encoded. Anything wider makes the whole payload degrade
/// to an empty string; the failure is logged and never propagated.
///
/// # Examples
///
/// ```
/// use email_variants::encoding::base64_encode;
///
/// assert_eq!(base64_encode("user"), "dXNlcg==");
/// assert_eq!(base64_encode("例子"), "");
/// ```
pub fn base64_encode(text: &str) -> String {
    let bytes: Option<Vec<u8>> = text.chars().map(|c| u8::try_from(c).ok()).collect();

    match bytes {
        Some(bytes) => base64::engine::general_purpose::STANDARD.encode(bytes),
        None => {
            tracing::warn!(payload = %text, "Failed to base64 encode payload, substituting empty string");
            String::new()
        }
    }
}
