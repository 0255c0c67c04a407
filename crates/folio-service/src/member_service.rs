//! Member service trait definition.

use crate::dto::{CreateMemberRequest, MemberDto, UsernameOnlyDto};
use async_trait::async_trait;
use folio_core::{DisplayPage, FolioResult, MemberId, Page, PageRequest};

/// Member service trait.
#[async_trait]
pub trait MemberService: Send + Sync {
    /// Gets a member by ID.
    async fn get_member(&self, id: MemberId) -> FolioResult<MemberDto>;

    /// Creates a member, creating its team by name if needed.
    async fn create_member(&self, request: CreateMemberRequest) -> FolioResult<MemberDto>;

    /// Lists members as a zero-based page.
    async fn list_members(&self, request: PageRequest) -> FolioResult<Page<MemberDto>>;

    /// Lists members as a one-based display page.
    async fn list_members_display(&self, request: PageRequest)
        -> FolioResult<DisplayPage<MemberDto>>;

    /// Lists members of the given age as a one-based display page, without
    /// counting the total.
    async fn slice_members_by_age(
        &self,
        age: u32,
        request: PageRequest,
    ) -> FolioResult<DisplayPage<MemberDto>>;

    /// Usernames of members named `username`.
    async fn username_projection(&self, username: &str) -> FolioResult<Vec<UsernameOnlyDto>>;
}
