//! Entity-DTO mappers.

use crate::dto::MemberDto;
use folio_core::{Member, Team, TeamId};
use std::collections::HashMap;

/// Team names by id, resolved once per page of members.
#[derive(Debug, Default)]
pub struct TeamNames(HashMap<TeamId, String>);

impl TeamNames {
    pub fn from_teams(teams: impl IntoIterator<Item = Team>) -> Self {
        Self(
            teams
                .into_iter()
                .filter_map(|team| team.id.map(|id| (id, team.name)))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, id: TeamId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Maps a member to its DTO, resolving the team name.
    #[must_use]
    pub fn member_dto(&self, member: Member) -> MemberDto {
        let team_name = member
            .team_id
            .and_then(|id| self.get(id))
            .map(str::to_string);
        MemberDto {
            id: member.id,
            username: member.username,
            team_name,
            audit: member.audit,
        }
    }
}
