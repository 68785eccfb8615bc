//! Services shared by the HTTP API and the CLI.

pub mod variant_service;

pub use variant_service::VariantService;
