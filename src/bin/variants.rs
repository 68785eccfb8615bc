//! Command-line front end for the email variant generator.
//!
//! # Usage
//!
//! ```bash
//! # Strict variants for a collaborator domain
//! cargo run --bin variants -- generate abc.oastify.com
//!
//! # Include the fuzzed batch, with a target for the routing templates
//! cargo run --bin variants -- generate abc.oastify.com -t target.example --fuzzed
//!
//! # Fixed illustrative sample
//! cargo run --bin variants -- demo
//!
//! # Classify arbitrary candidates
//! cargo run --bin variants -- check 'user@localhost' '"user"@abc.oastify.com'
//!
//! # Overflow aliases of a character
//! cargo run --bin variants -- overflow @
//! ```
//!
//! Plain output of `generate` is one address per line, so it can be piped
//! straight into a clipboard tool or a fuzzer wordlist. CR and LF inside a
//! variant are printed as `%0d` and `%0a`; `--json` keeps them raw.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use email_variants::application::services::VariantService;
use email_variants::encoding::{OVERFLOW_BASES, unicode_overflow};
use email_variants::prelude::{BatchStats, Classification, classify};
use tracing_subscriber::EnvFilter;

/// Collaborator used by `demo` when none is given.
const DEMO_COLLABORATOR: &str = "dm3ks06nakiknnszdonci5zfv61xpndc.oastify.com";
const DEMO_TARGET: &str = "example.com";

/// Email security test vector generator.
#[derive(Parser)]
#[command(name = "variants")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the variant list for a collaborator domain
    Generate {
        /// Collaborator / canary domain (e.g. "xyz.oastify.com")
        collaborator: String,

        /// Target domain for legacy routing templates (default: example.com)
        #[arg(short, long)]
        target: Option<String>,

        /// Include the valid subset of the fuzzed batch
        #[arg(short, long)]
        fuzzed: bool,

        /// Print the list as a JSON array
        #[arg(long, conflicts_with = "summary")]
        json: bool,

        /// Print per-batch counts after the list
        #[arg(short, long)]
        summary: bool,
    },

    /// Print a fixed illustrative sample of variants
    Demo {
        /// Collaborator domain substituted into the sample
        collaborator: Option<String>,

        /// Target domain substituted into the sample
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Classify candidates with the validity filter
    Check {
        /// Candidate addresses
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Show the code point overflow aliases of a character
    Overflow {
        /// A single character
        character: char,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            collaborator,
            target,
            fuzzed,
            json,
            summary,
        } => generate(&collaborator, target.as_deref(), fuzzed, json, summary)?,
        Commands::Demo {
            collaborator,
            target,
        } => demo(
            collaborator.as_deref().unwrap_or(DEMO_COLLABORATOR),
            target.as_deref().unwrap_or(DEMO_TARGET),
        )?,
        Commands::Check { candidates } => check(&candidates),
        Commands::Overflow { character } => overflow(character),
    }

    Ok(())
}

/// Prints the generated list.
fn generate(
    collaborator: &str,
    target: Option<&str>,
    include_fuzzed: bool,
    json: bool,
    summary: bool,
) -> Result<()> {
    let service = VariantService::default();
    let report = service
        .generate(collaborator, target, Some(include_fuzzed))
        .context("Collaborator/Canary domain is required")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.variants)?);
        return Ok(());
    }

    println!("{}", report.variants.to_text());

    if summary {
        eprintln!();
        eprintln!(
            "{} {}",
            "Generated variants:".bright_white().bold(),
            report.variants.len().to_string().bright_cyan()
        );
        print_batch("strict", &report.strict);
        if let Some(fuzzed) = &report.fuzzed {
            print_batch("fuzzed", fuzzed);
        }
    }

    Ok(())
}

fn print_batch(name: &str, stats: &BatchStats) {
    eprintln!(
        "  {:<8} generated {:>4}  accepted {:>4}  rejected {:>4}",
        name,
        stats.generated,
        stats.accepted.to_string().green(),
        stats.rejected.to_string().red()
    );
}

/// Prints a curated, numbered sample of the forms the generator covers.
fn demo(collaborator: &str, target: &str) -> Result<()> {
    println!("{}", "Email Security Test Vector Generator - Demo".bright_blue().bold());
    println!("{}", "=".repeat(44).bright_black());
    println!();
    println!("Using Collaborator: {}", collaborator.cyan());
    println!("Using Target Domain: {}", target.cyan());
    println!();
    println!(
        "{}",
        "Curated RFC-compliant & edge case email variants:".bright_white().bold()
    );
    println!();

    let sample = demo_sample(collaborator, target);
    for (index, email) in sample.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, email);
    }

    let full = VariantService::default()
        .generate(collaborator, Some(target), Some(true))
        .context("Collaborator/Canary domain is required")?;

    println!();
    println!(
        "Total sample variants shown: {}",
        sample.len().to_string().bright_cyan()
    );
    println!(
        "Full generator output (with fuzzed): {}",
        full.variants.len().to_string().bright_cyan()
    );
    println!();
    println!(
        "Run {} to see all variants",
        format!("variants generate {collaborator} --fuzzed").bright_yellow()
    );

    Ok(())
}

fn demo_sample(c: &str, t: &str) -> Vec<String> {
    vec![
        // basic
        format!("user@{c}"),
        format!("u.ser@{c}"),
        format!("user+tag@{c}"),
        format!("user_name@{c}"),
        format!("user-name@{c}"),
        format!(r#""user"@{c}"#),
        format!(r#""user.name"@{c}"#),
        format!("USER@{}", c.to_uppercase()),
        // literals and special domains
        "user@[127.0.0.1]".to_string(),
        "user@[IPv6:2001:db8::1]".to_string(),
        "user@localhost".to_string(),
        format!("user@subdomain.{c}"),
        // quoted local parts
        format!(r#""user\@name"@{c}"#),
        format!(r#""user name"@{c}"#),
        format!(r#""user.test"@{c}"#),
        format!(r#"" "@{c}"#),
        // comments
        format!("user(comment)@{c}"),
        format!("(foo)user@(bar){c}"),
        format!("user@(comment){c}"),
        // encoded words
        format!("=?UTF-8?B?dXNlcg==?=@{c}"),
        format!("=?UTF-8?Q?user?=@{c}"),
        // internationalized domains
        format!("user@exämple.{c}"),
        format!("user@例子.{c}"),
        format!("user@пример.{c}"),
        format!("user@xn--e1afmkfd.{c}"),
        format!("user@xn--fsqu00a.{c}"),
        // legacy routing
        format!("user%{c}@{t}"),
        format!("{t}!user@{c}"),
        // atext specials
        format!("!user@{c}"),
        format!("#user@{c}"),
        format!("$user@{c}"),
        format!("%user@{c}"),
        format!("'user@{c}"),
        format!("*user@{c}"),
        format!("=user@{c}"),
        format!("?user@{c}"),
        format!("^user@{c}"),
        format!("{{user@{c}"),
        format!("|user@{c}"),
        format!("~user@{c}"),
        // case
        format!("User@{c}"),
        format!("UsEr@{c}"),
        // dots
        format!(r#""user."@{c}"#),
        format!(r#"".user"@{c}"#),
        format!(r#""user..test"@{c}"#),
        // whitespace
        format!(r#""user test"@{c}"#),
        format!(r#"" user "@{c}"#),
        format!("\"\tuser\t\"@{c}"),
    ]
}

/// Prints each candidate with its classification.
fn check(candidates: &[String]) {
    for candidate in candidates {
        let label = match classify(candidate) {
            Classification::Valid => "VALID ".green().bold(),
            Classification::Fuzzed => "FUZZED".yellow().bold(),
        };
        println!("  {}  {}", label, candidate.escape_debug());
    }
}

/// Prints the overflow aliases of `character` with their code points.
fn overflow(character: char) {
    let source = u32::from(character);
    println!(
        "{} {:?} (U+{:04X})",
        "Overflow aliases for".bright_blue().bold(),
        character,
        source
    );

    let aliases = unicode_overflow(character);
    if aliases.is_empty() {
        println!("{}", "  No alias within the Unicode range".yellow());
        return;
    }

    for alias in &aliases {
        let code_point = alias.chars().next().map_or(0, u32::from);
        let base = OVERFLOW_BASES
            .iter()
            .find(|&&base| base + source == code_point)
            .copied()
            .unwrap_or_default();
        println!(
            "  U+{:06X}  {}  (base 0x{:X})",
            code_point,
            alias.escape_debug().to_string().bright_yellow(),
            base
        );
    }
}
