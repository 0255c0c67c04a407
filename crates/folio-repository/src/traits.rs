//! Repository trait definitions.

use async_trait::async_trait;
use folio_core::{FolioResult, Item, Member, MemberId, Page, PageRequest, Slice, Team, TeamId};

/// Hand-written member queries that sit outside the generated finders.
#[async_trait]
pub trait MemberRepositoryCustom: Send + Sync {
    /// Returns every member, in id order.
    async fn find_member_custom(&self) -> FolioResult<Vec<Member>>;
}

/// Member repository trait.
#[async_trait]
pub trait MemberRepository: MemberRepositoryCustom + Send + Sync {
    /// Inserts a new member or merges an existing one.
    ///
    /// Returns the stored member with its id and audit fields assigned.
    async fn save(&self, member: Member) -> FolioResult<Member>;

    /// Saves each member in order.
    async fn save_all(&self, members: Vec<Member>) -> FolioResult<Vec<Member>>;

    /// Finds a member by ID.
    async fn find_by_id(&self, id: MemberId) -> FolioResult<Option<Member>>;

    /// Finds all members, in id order.
    async fn find_all(&self) -> FolioResult<Vec<Member>>;

    /// Finds one page of all members.
    async fn find_all_page(&self, request: PageRequest) -> FolioResult<Page<Member>>;

    /// Finds members with the given username.
    async fn find_by_username(&self, username: &str) -> FolioResult<Vec<Member>>;

    /// Finds members with the given username older than `age`.
    async fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: u32,
    ) -> FolioResult<Vec<Member>>;

    /// Finds members matching both username and age exactly.
    async fn find_user(&self, username: &str, age: u32) -> FolioResult<Vec<Member>>;

    /// Lists every username, in id order.
    async fn find_username_list(&self) -> FolioResult<Vec<String>>;

    /// Finds members whose username is one of `names`.
    async fn find_by_names(&self, names: &[String]) -> FolioResult<Vec<Member>>;

    /// Finds the single member with the given username.
    ///
    /// Fails with `Conflict` when more than one member matches.
    async fn find_optional_by_username(&self, username: &str) -> FolioResult<Option<Member>>;

    /// Finds one counted page of members of the given age.
    async fn find_by_age_page(&self, age: u32, request: PageRequest) -> FolioResult<Page<Member>>;

    /// Finds one slice of members of the given age, without counting.
    async fn find_by_age_slice(&self, age: u32, request: PageRequest)
        -> FolioResult<Slice<Member>>;

    /// Increments the age of every member aged `age` or older.
    ///
    /// Returns the number of members updated.
    async fn bulk_age_plus(&self, age: u32) -> FolioResult<u64>;

    /// Deletes a member by ID.
    async fn delete(&self, id: MemberId) -> FolioResult<bool>;

    /// Counts all members.
    async fn count(&self) -> FolioResult<u64>;
}

/// Team repository trait.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Inserts a new team or merges an existing one.
    async fn save(&self, team: Team) -> FolioResult<Team>;

    /// Finds a team by ID.
    async fn find_by_id(&self, id: TeamId) -> FolioResult<Option<Team>>;

    /// Finds all teams, in id order.
    async fn find_all(&self) -> FolioResult<Vec<Team>>;
}

/// Item repository trait.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts the item when it is new, merges it otherwise.
    async fn save(&self, item: Item) -> FolioResult<Item>;

    /// Finds an item by ID.
    async fn find_by_id(&self, id: &str) -> FolioResult<Option<Item>>;
}
