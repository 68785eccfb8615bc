//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::VariantService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub variant_service: Arc<VariantService>,
    pub max_classify_batch: usize,
}

impl AppState {
    pub fn new(variant_service: Arc<VariantService>, max_classify_batch: usize) -> Self {
        Self {
            variant_service,
            max_classify_batch,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(VariantService::new(config.include_fuzzed_default)),
            config.max_classify_batch,
        )
    }
}
