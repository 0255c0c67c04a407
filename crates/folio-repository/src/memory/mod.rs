//! In-memory repository implementations.
//!
//! Rows live in `tokio::sync::RwLock`-guarded maps; member and team ids come
//! from a per-table sequence starting at 1.

mod item_repository;
mod member_repository;
mod table;
mod team_repository;

pub use item_repository::InMemoryItemRepository;
pub use member_repository::InMemoryMemberRepository;
pub use table::SequenceTable;
pub use team_repository::InMemoryTeamRepository;
