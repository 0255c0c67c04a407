//! Team entity.

use crate::{AuditFields, Auditable, Entity, TeamId};
use serde::{Deserialize, Serialize};

/// A named group of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<TeamId>,
    pub name: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Team {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            audit: AuditFields::default(),
        }
    }
}

impl Entity for Team {
    type Id = TeamId;

    fn id(&self) -> Option<TeamId> {
        self.id
    }
}

impl Auditable for Team {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}
