//! # Email Variants
//!
//! Generates large, deduplicated, sorted catalogs of syntactically varied
//! email addresses aimed at an out-of-band collaborator domain, for probing
//! SSRF, SMTP injection and header-parsing differentials.
//!
//! ## Architecture
//!
//! - **Catalog** ([`catalog`]) - Address templates grouped by syntax category
//! - **Encoding** ([`encoding`]) - Base64, RFC 2047 words, punycode table,
//!   code point overflow
//! - **Validity** ([`validity`]) - RFC 5322-approximate acceptance test
//! - **Domain** ([`domain`]) - Aggregation into an ordered, unique variant set
//! - **Application** ([`application`]) - Service defaults for outer callers
//! - **API** ([`api`]) - JSON endpoints over the generator
//!
//! ## Quick Start
//!
//! ```
//! use email_variants::generate;
//!
//! let strict = generate("abc.oastify.com", None, false).unwrap();
//! let full = generate("abc.oastify.com", Some("target.example"), true).unwrap();
//!
//! assert!(strict.contains("user@abc.oastify.com"));
//! assert!(strict.iter().all(|v| full.contains(v)));
//! ```
//!
//! ## Configuration
//!
//! The HTTP service reads its settings from environment variables via
//! [`config::Config`]. The library itself has no configuration.

pub mod api;
pub mod application;
pub mod catalog;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod state;
pub mod validity;

pub mod config;
pub mod server;

pub mod routes;

pub use domain::{VariantReport, VariantSet, generate, generate_report};
pub use error::{AppError, GeneratorError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::VariantService;
    pub use crate::catalog::{Batch, Category, TemplateContext};
    pub use crate::domain::{BatchStats, VariantReport, VariantSet, generate, generate_report};
    pub use crate::error::{AppError, GeneratorError};
    pub use crate::state::AppState;
    pub use crate::validity::{Classification, classify, is_valid_email};
}
