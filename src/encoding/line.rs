use std::borrow::Cow;

/// Renders a variant on a single text line.
///
/// CR and LF become `%0d` and `%0a`, the same spelling the injection
/// templates already use for their URL-encoded forms. Every other character,
/// NUL and tab included, is left as generated.
pub fn line_safe(variant: &str) -> Cow<'_, str> {
    if !variant.contains(&['\r', '\n'][..]) {
        return Cow::Borrowed(variant);
    }

    Cow::Owned(variant.replace('\r', "%0d").replace('\n', "%0a"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_variant_borrowed() {
        assert!(matches!(line_safe("user@abc.oastify.com"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_crlf_percent_encoded() {
        assert_eq!(
            line_safe("user(\r\nBcc:user@abc.oastify.com)@abc.oastify.com"),
            "user(%0d%0aBcc:user@abc.oastify.com)@abc.oastify.com"
        );
        assert_eq!(line_safe("a\nb\rc"), "a%0ab%0dc");
    }

    #[test]
    fn test_other_controls_untouched() {
        assert_eq!(line_safe("user(\0)@abc.oastify.com"), "user(\0)@abc.oastify.com");
        assert_eq!(line_safe("user\t@abc.oastify.com"), "user\t@abc.oastify.com");
    }
}
