//! Projections: partial views of a member built at query time.

use crate::traits::MemberRepository;
use async_trait::async_trait;
use folio_core::{FolioResult, Member};
use serde::Serialize;

/// Just the username of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsernameOnly {
    pub username: String,
}

impl From<&Member> for UsernameOnly {
    fn from(member: &Member) -> Self {
        Self {
            username: member.username.clone(),
        }
    }
}

/// Finders returning a caller-chosen projection instead of whole members.
#[async_trait]
pub trait MemberProjections: MemberRepository {
    /// Members named `username`, each projected to `P`.
    async fn find_projections_by_username<P>(&self, username: &str) -> FolioResult<Vec<P>>
    where
        P: for<'a> From<&'a Member> + Send,
    {
        let members = self.find_by_username(username).await?;
        Ok(members.iter().map(P::from).collect())
    }
}

impl<R: MemberRepository + ?Sized> MemberProjections for R {}
