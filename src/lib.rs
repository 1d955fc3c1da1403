// src/lib.rs

//! Progress dashboard backend.
//!
//! Serves construction-project schedules, KPIs and daily progress reports to
//! the dashboard frontend as JSON, and pushes a periodic `update` event to
//! realtime subscribers.
//!
//! - `/api/*` data endpoints behind HTTP Basic Auth ([`auth`])
//! - one short-lived database connection per request ([`db`])
//! - literal fixtures for the mock, KPI and weekly views ([`mock`])
//! - an optional on-disk test record merged into daily reports ([`test_data`])
//! - a broadcast loop feeding `/ws/updates` ([`notifier`])

use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod mock;
pub mod models;
pub mod notifier;
pub mod routes;
pub mod telemetry;
pub mod test_data;

pub use routes::build_router;

use auth::CredentialVerifier;
use db::ReportStore;
use notifier::UpdateHub;
use test_data::TestDataProvider;

/// Server context, built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReportStore>,
    pub test_data: TestDataProvider,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub updates: UpdateHub,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ReportStore>,
        test_data: TestDataProvider,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            store,
            test_data,
            credentials,
            updates: UpdateHub::new(),
        }
    }
}
