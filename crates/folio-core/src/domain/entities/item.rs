//! Item entity with a caller-assigned identifier.

use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An item whose id is chosen by the caller, not generated on save.
///
/// Since the id is always present, newness is decided by the creation
/// timestamp instead: an item is new until the repository stamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub created_date: Option<DateTime<Utc>>,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_date: None,
        }
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> Option<String> {
        Some(self.id.clone())
    }

    fn is_new(&self) -> bool {
        self.created_date.is_none()
    }
}
