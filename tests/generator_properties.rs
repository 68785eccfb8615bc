use email_variants::catalog::{Batch, Category, TemplateContext, expand_batch};
use email_variants::encoding::unicode_overflow;
use email_variants::prelude::*;
use std::collections::HashSet;

const COLLABORATORS: &[&str] = &[
    "abc.oastify.com",
    "c.example",
    "dm3ks06nakiknnszdonci5zfv61xpndc.oastify.com",
    "Mixed.Case.Burpcollaborator.NET",
];
const TARGETS: &[Option<&str>] = &[None, Some(""), Some("target.example"), Some("t.io")];

fn all_inputs() -> impl Iterator<Item = (&'static str, Option<&'static str>, bool)> {
    COLLABORATORS.iter().flat_map(|&c| {
        TARGETS
            .iter()
            .flat_map(move |&t| [false, true].into_iter().map(move |f| (c, t, f)))
    })
}

#[test]
fn test_determinism() {
    for (c, t, f) in all_inputs() {
        assert_eq!(generate(c, t, f).unwrap(), generate(c, t, f).unwrap());
    }
}

#[test]
fn test_no_duplicates() {
    for (c, t, f) in all_inputs() {
        let variants = generate(c, t, f).unwrap();
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
    }
}

#[test]
fn test_sort_order() {
    for (c, t, f) in all_inputs() {
        let variants = generate(c, t, f).unwrap();
        assert!(variants.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_monotonic_inclusion() {
    for &c in COLLABORATORS {
        for &t in TARGETS {
            let strict = generate(c, t, false).unwrap();
            let full = generate(c, t, true).unwrap();
            assert!(strict.iter().all(|v| full.contains(v)), "{c} {t:?}");
        }
    }
}

#[test]
fn test_strict_batch_substitutes_collaborator() {
    for &c in COLLABORATORS {
        let ctx = TemplateContext::new(c, None);
        for candidate in expand_batch(Batch::Strict, &ctx) {
            let literal = candidate.ends_with(']') || candidate.ends_with("@localhost");
            assert!(candidate.contains(c) || literal, "{candidate}");
        }
    }
}

#[test]
fn test_blank_collaborator_fails() {
    assert!(matches!(
        generate("", Some("x"), false),
        Err(GeneratorError::InvalidInput(_))
    ));
    assert!(matches!(
        generate("   ", Some("x"), false),
        Err(GeneratorError::InvalidInput(_))
    ));
}

#[test]
fn test_default_target_in_routing() {
    assert!(generate("c.example", Some(""), false).is_ok());

    let ctx = TemplateContext::new("c.example", Some(""));
    let routing = Category::LegacyRouting.expand(&ctx);
    assert!(routing.iter().all(|v| v.contains("example.com")));

    let full = generate("c.example", Some(""), true).unwrap();
    for candidate in routing.iter().filter(|v| is_valid_email(v)) {
        assert!(full.contains(candidate), "{candidate}");
    }
}

#[test]
fn test_strict_scenario() {
    let variants = generate("abc.oastify.com", Some(""), false).unwrap();
    assert!(variants.contains("user@abc.oastify.com"));
    for payload in ["<svg", "<script", "<img", "javascript:"] {
        assert!(variants.iter().all(|v| !v.contains(payload)), "{payload}");
    }
}

#[test]
fn test_fuzzed_scenario() {
    let strict = generate("abc.oastify.com", Some(""), false).unwrap();
    let full = generate("abc.oastify.com", Some(""), true).unwrap();

    let additions: Vec<&String> = full.iter().filter(|v| !strict.contains(v)).collect();
    assert!(additions.iter().any(|v| v.contains("xn--")));
    assert!(additions.iter().any(|v| v.contains("<svg")));
}

#[test]
fn test_overflow_bounds() {
    let aliases = unicode_overflow('@');
    assert!(aliases.len() <= 4);
    for alias in &aliases {
        for ch in alias.chars() {
            assert!(u32::from(ch) <= 0x10FFFF);
        }
    }

    for byte in 0u8..=0x7F {
        let _ = unicode_overflow(char::from(byte));
    }
}

#[test]
fn test_case_is_never_normalized() {
    let full = generate("abc.oastify.com", None, true).unwrap();
    assert!(full.contains("user@abc.oastify.com"));
    assert!(full.contains("user@ABC.OASTIFY.COM"));
    assert!(full.contains("USER@abc.oastify.com"));
}

#[test]
fn test_categories_are_additive() {
    let ctx = TemplateContext::new("abc.oastify.com", Some("t.io"));
    let before: Vec<Vec<String>> = Category::ALL.iter().map(|c| c.expand(&ctx)).collect();

    // Expanding in reverse order must not change any category's output
    for (index, category) in Category::ALL.iter().enumerate().rev() {
        assert_eq!(category.expand(&ctx), before[index]);
    }
}

#[test]
fn test_report_variants_match_generate() {
    let report = generate_report("abc.oastify.com", None, true).unwrap();
    assert_eq!(report.variants, generate("abc.oastify.com", None, true).unwrap());
}
