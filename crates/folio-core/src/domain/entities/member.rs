//! Member entity.

use crate::{AuditFields, Auditable, Entity, MemberId, TeamId};
use serde::{Deserialize, Serialize};

/// A club member, optionally belonging to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Assigned by the repository on first save.
    pub id: Option<MemberId>,
    pub username: String,
    pub age: u32,
    pub team_id: Option<TeamId>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Member {
    /// Creates an unsaved member with age zero and no team.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_age(username, 0)
    }

    /// Creates an unsaved member with the given age.
    #[must_use]
    pub fn with_age(username: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            username: username.into(),
            age,
            team_id: None,
            audit: AuditFields::default(),
        }
    }

    /// Creates an unsaved member on a team.
    #[must_use]
    pub fn with_team(username: impl Into<String>, age: u32, team_id: TeamId) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::with_age(username, age)
        }
    }

    pub fn change_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn change_team(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> Option<MemberId> {
        self.id
    }
}

impl Auditable for Member {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}
