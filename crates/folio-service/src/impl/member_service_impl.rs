//! Member service implementation.

use crate::dto::{CreateMemberRequest, MemberDto, UsernameOnlyDto};
use crate::mappers::TeamNames;
use crate::member_service::MemberService;
use async_trait::async_trait;
use folio_core::{
    DisplayPage, FolioError, FolioResult, Member, MemberId, Page, PageRequest, PageResultAdapter,
    Team, TeamId, ValidateExt,
};
use folio_repository::{MemberProjections, MemberRepository, TeamRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Member service over member and team repositories.
pub struct MemberServiceImpl {
    members: Arc<dyn MemberRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl MemberServiceImpl {
    /// Creates a new member service.
    pub fn new(members: Arc<dyn MemberRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { members, teams }
    }

    async fn team_names(&self) -> FolioResult<TeamNames> {
        Ok(TeamNames::from_teams(self.teams.find_all().await?))
    }

    async fn team_by_name(&self, name: &str) -> FolioResult<TeamId> {
        let existing = self
            .teams
            .find_all()
            .await?
            .into_iter()
            .find_map(|team| team.id.filter(|_| team.name == name));

        match existing {
            Some(id) => Ok(id),
            None => {
                let team = self.teams.save(Team::new(name)).await?;
                info!("Team created: {}", team.name);
                team.id
                    .ok_or_else(|| FolioError::internal("Saved team has no id"))
            }
        }
    }
}

#[async_trait]
impl MemberService for MemberServiceImpl {
    async fn get_member(&self, id: MemberId) -> FolioResult<MemberDto> {
        debug!("Getting member: {}", id);

        let member = self
            .members
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Member", id))?;

        Ok(self.team_names().await?.member_dto(member))
    }

    async fn create_member(&self, request: CreateMemberRequest) -> FolioResult<MemberDto> {
        debug!("Creating member: {}", request.username);

        request.validate_request()?;

        let member = match request.team_name.as_deref() {
            Some(team_name) => {
                let team_id = self.team_by_name(team_name.trim()).await?;
                Member::with_team(request.username, request.age, team_id)
            }
            None => Member::with_age(request.username, request.age),
        };

        let saved = self.members.save(member).await?;
        if let Some(id) = saved.id {
            info!("Member created: {}", id);
        }
        Ok(self.team_names().await?.member_dto(saved))
    }

    async fn list_members(&self, request: PageRequest) -> FolioResult<Page<MemberDto>> {
        debug!(
            "Listing members, page: {}, size: {}",
            request.page_index(),
            request.page_size()
        );

        let page = self.members.find_all_page(request).await?;
        let names = self.team_names().await?;
        Ok(page.map(|member| names.member_dto(member)))
    }

    async fn list_members_display(
        &self,
        request: PageRequest,
    ) -> FolioResult<DisplayPage<MemberDto>> {
        let page = self.members.find_all_page(request).await?;
        let names = self.team_names().await?;
        PageResultAdapter::adapt_counted_with(page, |member| names.member_dto(member))
    }

    async fn slice_members_by_age(
        &self,
        age: u32,
        request: PageRequest,
    ) -> FolioResult<DisplayPage<MemberDto>> {
        debug!("Slicing members aged {}", age);

        let slice = self.members.find_by_age_slice(age, request).await?;
        let names = self.team_names().await?;
        PageResultAdapter::adapt_slice_with(slice, |member| names.member_dto(member))
    }

    async fn username_projection(&self, username: &str) -> FolioResult<Vec<UsernameOnlyDto>> {
        self.members.find_projections_by_username(username).await
    }
}
