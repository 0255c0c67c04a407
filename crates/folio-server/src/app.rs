//! Application wiring.

use folio_config::AppConfig;
use folio_core::{AuditInterceptor, FolioResult, Member};
use folio_repository::{
    InMemoryMemberRepository, InMemoryTeamRepository, MemberRepository, RepositoryHealthCheck,
    TeamRepository,
};
use folio_rest::AppState;
use folio_service::MemberServiceImpl;
use std::sync::Arc;
use tracing::info;

/// Auditor recorded on rows written by the server itself.
const SYSTEM_AUDITOR: &str = "system";

/// Repositories, services and REST state for one server instance.
pub struct Application {
    pub members: Arc<dyn MemberRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub state: AppState,
}

impl Application {
    /// Wires repositories and services from configuration.
    pub fn build(config: &AppConfig) -> Self {
        let audit = AuditInterceptor::with_auditor(SYSTEM_AUDITOR);
        let members: Arc<dyn MemberRepository> =
            Arc::new(InMemoryMemberRepository::new(audit.clone()));
        let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::new(audit));

        let service = Arc::new(MemberServiceImpl::new(members.clone(), teams.clone()));
        let state = AppState::new(service, config.paging.clone())
            .with_health_check(Arc::new(RepositoryHealthCheck::new(members.clone())));

        Self {
            members,
            teams,
            state,
        }
    }

    /// Inserts `count` demo members named `user0`, `user1`, ... aged by index.
    pub async fn seed(&self, count: u32) -> FolioResult<()> {
        if count == 0 {
            return Ok(());
        }

        let members = (0..count)
            .map(|i| Member::with_age(format!("user{i}"), i))
            .collect();
        self.members.save_all(members).await?;

        info!("Seeded {} demo members", count);
        Ok(())
    }
}
