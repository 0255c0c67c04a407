//! Health check for the data-access layer.

use crate::traits::MemberRepository;
use async_trait::async_trait;
use folio_core::{HealthCheck, HealthStatus};
use std::sync::Arc;

/// Reports healthy while the member store answers a count.
pub struct RepositoryHealthCheck {
    members: Arc<dyn MemberRepository>,
}

impl RepositoryHealthCheck {
    #[must_use]
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl HealthCheck for RepositoryHealthCheck {
    fn name(&self) -> &str {
        "repository"
    }

    async fn check(&self) -> HealthStatus {
        match self.members.count().await {
            Ok(_) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}
