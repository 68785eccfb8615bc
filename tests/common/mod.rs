#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use email_variants::application::services::VariantService;
use email_variants::config::Config;
use email_variants::routes::app_router;
use email_variants::state::AppState;
use std::sync::Arc;

pub const COLLABORATOR: &str = "abc.oastify.com";

pub fn create_test_state(include_fuzzed_default: bool, max_classify_batch: usize) -> AppState {
    AppState::new(
        Arc::new(VariantService::new(include_fuzzed_default)),
        max_classify_batch,
    )
}

pub fn default_state() -> AppState {
    AppState::from_config(&Config::default())
}

/// Server over the full application router, middleware included.
pub fn create_app_server(state: AppState) -> TestServer {
    let app = app_router(state);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
