//! # Folio Repository
//!
//! Data access for members, teams and items.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn MemberRepository>   (domain interface)
//! InMemoryMemberRepository         (sorting, paging, audit stamping)
//!   ↓
//! SequenceTable<Member>            (id sequence + RwLock'd rows)
//! ```
//!
//! Paged finders answer a zero-based [`PageRequest`](folio_core::PageRequest)
//! with a counted [`Page`](folio_core::Page) or a probed
//! [`Slice`](folio_core::Slice). Renumbering for clients happens above this
//! layer.

pub mod health;
pub mod memory;
pub mod paging;
pub mod projection;
pub mod sorting;
pub mod traits;

pub use health::RepositoryHealthCheck;
pub use memory::{InMemoryItemRepository, InMemoryMemberRepository, InMemoryTeamRepository};
pub use projection::{MemberProjections, UsernameOnly};
pub use traits::*;
