//! Core generation model and the aggregator.
//!
//! # Architecture
//!
//! - [`entities`] - immutable results: [`entities::VariantSet`],
//!   [`entities::BatchStats`], [`entities::VariantReport`]
//! - [`aggregator`] - builds both batches from the [`crate::catalog`], filters
//!   them through [`crate::validity`], deduplicates and sorts
//!
//! # Generation Flow
//!
//! 1. Reject a blank collaborator domain
//! 2. Expand the strict batch and keep the candidates classified valid
//! 3. If requested, do the same for the fuzzed batch
//! 4. Collect the union into one ordered set

pub mod aggregator;
pub mod entities;

pub use aggregator::{generate, generate_report};
pub use entities::{BatchStats, VariantReport, VariantSet};
