//! Application state for Axum handlers.

use axum::extract::FromRef;
use folio_config::PagingConfig;
use folio_core::HealthCheck;
use folio_service::MemberService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<dyn MemberService>,
    pub paging: PagingConfig,
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(member_service: Arc<dyn MemberService>, paging: PagingConfig) -> Self {
        Self {
            member_service,
            paging,
            health_checks: Vec::new(),
        }
    }

    /// Adds a check consulted by the readiness endpoint.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}

impl FromRef<AppState> for PagingConfig {
    fn from_ref(state: &AppState) -> Self {
        state.paging.clone()
    }
}
