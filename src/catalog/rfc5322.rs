//! RFC 5322 address forms: atoms, quoted strings, comments, domain literals
//! and case variants.

use super::TemplateContext;

/// Dot-atom local parts, including the alphanumeric combinations.
pub(super) fn basic(ctx: &TemplateContext<'_>) -> Vec<String> {
    const LOCAL_PARTS: &[&str] = &[
        "user",
        "u.ser",
        "user+tag",
        "user_name",
        "user-name",
        "user+test",
        "user-test",
        "user_test",
        "user.test",
        "test.user",
        "user123",
        "123user",
        "user+123",
        "user-123",
        "user_123",
        "user.123",
    ];

    LOCAL_PARTS
        .iter()
        .map(|local| format!("{local}@{}", ctx.collaborator))
        .collect()
}

/// Quoted local parts, escaped and unescaped.
pub(super) fn quoted(ctx: &TemplateContext<'_>) -> Vec<String> {
    const LOCAL_PARTS: &[&str] = &[
        r#""user""#,
        r#""user.name""#,
        r#""user\@name""#,
        r#""user\"name""#,
        r#""user name""#,
        r#""user.test""#,
        r#""user@test""#,
        r#"" ""#,
        r#""test\\user""#,
        // dots that would be illegal unquoted
        r#""user.""#,
        r#"".user""#,
        r#""user..test""#,
        r#""user.test.""#,
    ];

    LOCAL_PARTS
        .iter()
        .map(|local| format!("{local}@{}", ctx.collaborator))
        .collect()
}

pub(super) fn comments(ctx: &TemplateContext<'_>) -> Vec<String> {
    let c = ctx.collaborator;
    vec![
        format!("user(comment)@{c}"),
        format!("(foo)user@(bar){c}"),
        format!("user@(comment){c}"),
        format!("user(work)@{c}"),
        format!("user@{c}(office)"),
        format!("(comment)user@{c}"),
        format!("(comment)user(comment)@(comment){c}(comment)"),
    ]
}

/// IP literals, `localhost` and subdomains of the collaborator.
pub(super) fn domain_literals(ctx: &TemplateContext<'_>) -> Vec<String> {
    const LITERALS: &[&str] = &[
        "[127.0.0.1]",
        "[192.168.1.1]",
        "[10.0.0.1]",
        "[172.16.0.1]",
        "[::1]",
        "[IPv6:2001:db8::1]",
        "[IPv6:::1]",
        "[IPv6:fe80::1]",
        "localhost",
    ];
    const SUBDOMAINS: &[&str] = &["subdomain", "mail", "mx", "smtp", "test", "dev"];
    const SUFFIXES: &[&str] = &["local", "localdomain"];

    let c = ctx.collaborator;
    let literals = LITERALS.iter().map(|lit| format!("user@{lit}"));
    let prefixed = SUBDOMAINS.iter().map(|sub| format!("user@{sub}.{c}"));
    let suffixed = SUFFIXES.iter().map(|suffix| format!("user@{c}.{suffix}"));

    literals.chain(prefixed).chain(suffixed).collect()
}

/// Case is never normalized, so every variant here is a distinct candidate.
pub(super) fn case_variants(ctx: &TemplateContext<'_>) -> Vec<String> {
    let c = ctx.collaborator;
    let upper = c.to_uppercase();
    let lower = c.to_lowercase();
    let mixed = alternate_case(c);

    vec![
        format!("User@{c}"),
        format!("USER@{c}"),
        format!("UsEr@{c}"),
        format!("user@{upper}"),
        format!("user@{lower}"),
        format!("user@{mixed}"),
        format!("USER@{upper}"),
        format!(r#""User"@{c}"#),
        format!(r#""USER"@{c}"#),
    ]
}

/// Upper-cases every other alphabetic character, starting with the first.
fn alternate_case(text: &str) -> String {
    let mut upper = true;
    text.chars()
        .map(|ch| {
            if !ch.is_alphabetic() {
                return ch.to_string();
            }
            let out = if upper {
                ch.to_uppercase().to_string()
            } else {
                ch.to_lowercase().to_string()
            };
            upper = !upper;
            out
        })
        .collect()
}
