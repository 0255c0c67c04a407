use super::SequenceTable;
use crate::traits::TeamRepository;
use async_trait::async_trait;
use folio_core::{AuditInterceptor, FolioError, FolioResult, Team, TeamId};
use tracing::debug;

/// Team repository backed by a [`SequenceTable`].
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    table: SequenceTable<Team>,
    audit: AuditInterceptor,
}

impl InMemoryTeamRepository {
    #[must_use]
    pub fn new(audit: AuditInterceptor) -> Self {
        Self {
            table: SequenceTable::new(),
            audit,
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, mut team: Team) -> FolioResult<Team> {
        let mut rows = self.table.write().await;

        match team.id {
            None => {
                let id = self.table.next_id();
                team.id = Some(TeamId(id));
                self.audit.on_insert(&mut team);
                debug!(id, name = %team.name, "Repository: inserted team");
                rows.insert(id, team.clone());
            }
            Some(id) => {
                let stored = rows
                    .get(&id.0)
                    .ok_or_else(|| FolioError::not_found("Team", id))?;
                team.audit.created_by.clone_from(&stored.audit.created_by);
                team.audit.created_date = stored.audit.created_date;
                self.audit.on_update(&mut team);
                rows.insert(id.0, team.clone());
            }
        }

        Ok(team)
    }

    async fn find_by_id(&self, id: TeamId) -> FolioResult<Option<Team>> {
        Ok(self.table.get(id.0).await)
    }

    async fn find_all(&self) -> FolioResult<Vec<Team>> {
        Ok(self.table.all().await)
    }
}
